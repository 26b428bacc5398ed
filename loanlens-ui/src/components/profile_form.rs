//! Profile Form Component
//!
//! Applicant profile form with submission and result display. Used on both
//! the applicant and bank pages, each with its own predictor state.

use leptos::*;

use loanlens::model::{AmountField, ChoiceField};
use loanlens::SinglePredictor;

use super::{InlineLoading, PredictionCard};
use crate::state::AppContext;

/// Single-applicant prediction form
#[component]
pub fn ProfileForm(
    #[prop(into)]
    title: String,
    #[prop(default = "Estimate my chances")]
    submit_label: &'static str,
    #[prop(default = "grid md:grid-cols-3 gap-6")]
    grid_class: &'static str,
) -> impl IntoView {
    let context = expect_context::<AppContext>();
    let predictor = create_rw_signal(SinglePredictor::new());
    let busy = create_memo(move |_| predictor.with(SinglePredictor::is_busy));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(ticket) = predictor.try_update(SinglePredictor::begin_submit).flatten() else {
            return;
        };

        let client = context.client.clone();
        spawn_local(async move {
            let (generation, profile) = ticket.into_parts();
            let outcome = client.predict_one(&profile).await;
            // The page may have been left while the request was in flight
            if predictor
                .try_update(|p| p.complete(generation, outcome))
                .is_none()
            {
                tracing::debug!("Prediction arrived after the form was disposed");
            }
        });
    };

    view! {
        <div class="bg-white p-6 md:p-8 rounded-2xl shadow space-y-6">
            <form on:submit=on_submit class="space-y-6">
                <h2 class="text-2xl font-semibold">{title}</h2>

                <div class=grid_class>
                    {ChoiceField::ALL
                        .into_iter()
                        .map(|field| view! { <ChoiceInput field=field predictor=predictor /> })
                        .collect_view()}
                    {AmountField::ALL
                        .into_iter()
                        .map(|field| view! { <AmountInput field=field predictor=predictor /> })
                        .collect_view()}
                </div>

                <button
                    type="submit"
                    disabled=move || busy.get()
                    class="w-full bg-blue-600 hover:bg-blue-700 disabled:opacity-50 text-white
                           font-semibold px-5 py-3 rounded-xl transition flex items-center
                           justify-center space-x-2"
                >
                    {move || if busy.get() {
                        view! {
                            <InlineLoading />
                            <span>"Predicting…"</span>
                        }.into_view()
                    } else {
                        view! { <span>{submit_label}</span> }.into_view()
                    }}
                </button>

                {move || predictor.with(|p| p.error().map(str::to_string)).map(|message| view! {
                    <p class="text-rose-600 text-sm">{message}</p>
                })}
            </form>

            {move || predictor.with(|p| p.result().copied()).map(|result| view! {
                <PredictionCard result=result />
            })}
        </div>
    }
}

#[component]
fn ChoiceInput(field: ChoiceField, predictor: RwSignal<SinglePredictor>) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        predictor.update(|p| {
            if let Err(e) = p.profile_mut().set_choice(field, &value) {
                tracing::warn!("Ignoring profile change: {}", e);
            }
        });
    };

    view! {
        <label class="flex flex-col">
            <span class="text-sm font-medium text-slate-700 mb-1">{field.label()}</span>
            <select
                class="border rounded-xl p-2 focus:ring-2 focus:ring-blue-500 outline-none"
                on:change=on_change
            >
                {field
                    .options()
                    .into_iter()
                    .map(|option| view! {
                        <option
                            value=option
                            selected=move || predictor.with(|p| p.profile().choice(field) == option)
                        >
                            {option}
                        </option>
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
fn AmountInput(field: AmountField, predictor: RwSignal<SinglePredictor>) -> impl IntoView {
    let on_input = move |ev: web_sys::Event| {
        let amount = parse_amount(&event_target_value(&ev));
        predictor.update(|p| p.profile_mut().set_amount(field, amount));
    };

    let (min, step) = match field {
        AmountField::LoanAmount => ("1000", "1000"),
        _ => ("0", "any"),
    };

    view! {
        <label class="flex flex-col">
            <span class="text-sm font-medium text-slate-700 mb-1">
                {format!("{} (€)", field.label())}
            </span>
            <input
                type="number"
                min=min
                step=step
                class="border rounded-xl p-2 w-full focus:ring-2 focus:ring-blue-500 outline-none"
                prop:value=move || predictor.with(|p| p.profile().amount(field).to_string())
                on:input=on_input
            />
        </label>
    }
}

/// Empty input counts as zero; anything unparsable is caught by validation
fn parse_amount(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        0.0
    } else {
        raw.parse().unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount(" 5000 "), 5000.0);
        assert!(parse_amount("12abc").is_nan());
    }
}
