//! Feedback Survey Component
//!
//! Optional questionnaire under the applicant estimate. Sending is
//! best-effort: failures are only logged.

use gloo_timers::callback::Timeout;
use leptos::*;

use loanlens::model::FeedbackField;
use loanlens::FeedbackForm;

use crate::state::AppContext;

/// How long the "thank you" notice stays up
const SAVED_NOTICE_MS: u32 = 3000;

#[component]
pub fn FeedbackSurvey() -> impl IntoView {
    let context = expect_context::<AppContext>();
    let form = create_rw_signal(FeedbackForm::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(ticket) = form.try_update(FeedbackForm::begin_submit).flatten() else {
            return;
        };

        let client = context.client.clone();
        spawn_local(async move {
            let (generation, entry) = ticket.into_parts();
            let outcome = client.submit_feedback(&entry).await;

            let thanked = form
                .try_update(|f| f.complete(generation, outcome))
                .unwrap_or(false);
            if thanked {
                Timeout::new(SAVED_NOTICE_MS, move || {
                    let _ = form.try_update(FeedbackForm::dismiss_saved);
                })
                .forget();
            }
        });
    };

    view! {
        <form on:submit=on_submit class="bg-white p-8 rounded-2xl shadow space-y-6">
            <div>
                <h2 class="text-2xl font-semibold">"Help us improve"</h2>
                <p class="text-slate-500 text-sm">"All questions are optional."</p>
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                {FeedbackField::ALL
                    .into_iter()
                    .map(|field| view! { <SurveyField field=field form=form /> })
                    .collect_view()}
            </div>

            {move || form.with(|f| f.invalid().map(str::to_string)).map(|message| view! {
                <p class="text-rose-600 text-sm">{message}</p>
            })}

            <button
                type="submit"
                disabled=move || form.with(FeedbackForm::is_sending)
                class="bg-slate-800 hover:bg-slate-900 disabled:opacity-50 text-white font-semibold
                       px-5 py-2 rounded-xl transition"
            >
                "Send feedback"
            </button>

            {move || form.with(FeedbackForm::is_saved).then(|| view! {
                <p class="text-emerald-600 text-sm">"✅ Thank you for your feedback!"</p>
            })}
        </form>
    }
}

#[component]
fn SurveyField(field: FeedbackField, form: RwSignal<FeedbackForm>) -> impl IntoView {
    let current = move || form.with(|f| f.get(field).to_string());
    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        form.update(|f| f.set(field, value));
    };
    let input_class = "border rounded-xl p-2 focus:ring-2 focus:ring-blue-500 outline-none";

    let control = match field.options() {
        Some(options) => view! {
            <select class=input_class on:change=on_change prop:value=current>
                <option value="" selected=move || current().is_empty()>"-- Select --"</option>
                {options
                    .into_iter()
                    .map(|option| view! {
                        <option value=option selected=move || current() == option>{option}</option>
                    })
                    .collect_view()}
            </select>
        }
        .into_view(),
        None => {
            let kind = if field == FeedbackField::PersonalContribution {
                "number"
            } else {
                "text"
            };
            view! {
                <input type=kind min="0" class=input_class prop:value=current on:input=on_change />
            }
            .into_view()
        }
    };

    view! {
        <label class="flex flex-col">
            <span class="text-sm font-medium text-slate-700 mb-1">{field.label()}</span>
            {control}
        </label>
    }
}
