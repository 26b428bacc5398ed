//! Admin Login Component
//!
//! Credential form in front of the dashboard. Verification is delegated to
//! the configured authenticator.

use leptos::*;

use loanlens::LoginForm;

use super::InlineLoading;
use crate::state::AppContext;

#[component]
pub fn AdminLogin(login: RwSignal<LoginForm>) -> impl IntoView {
    let context = expect_context::<AppContext>();
    let checking = create_memo(move |_| login.with(LoginForm::is_checking));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(ticket) = login.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };

        let authenticator = context.authenticator.clone();
        spawn_local(async move {
            let (generation, credentials) = ticket.into_parts();
            let outcome = authenticator.verify(&credentials).await;
            let _ = login.try_update(|l| l.complete(generation, outcome));
        });
    };

    let input_class =
        "mt-1 w-full border rounded-xl p-2 focus:ring-2 focus:ring-blue-500 outline-none";

    view! {
        <div class="min-h-[60vh] flex items-center justify-center">
            <form
                on:submit=on_submit
                class="bg-white p-8 rounded-2xl shadow w-full max-w-sm space-y-6"
            >
                <h1 class="text-2xl font-bold text-center">"Admin sign-in"</h1>

                <label class="block">
                    <span class="block text-sm font-medium text-slate-700">"Username"</span>
                    <input
                        type="text"
                        autocomplete="username"
                        class=input_class
                        prop:value=move || login.with(|l| l.username.clone())
                        on:input=move |ev| login.update(|l| l.username = event_target_value(&ev))
                    />
                </label>

                <label class="block">
                    <span class="block text-sm font-medium text-slate-700">"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        class=input_class
                        prop:value=move || login.with(|l| l.password.clone())
                        on:input=move |ev| login.update(|l| l.password = event_target_value(&ev))
                    />
                </label>

                {move || login.with(|l| l.error().map(str::to_string)).map(|message| view! {
                    <p class="text-rose-600 text-sm">{message}</p>
                })}

                <button
                    type="submit"
                    disabled=move || checking.get()
                    class="w-full bg-blue-600 hover:bg-blue-700 disabled:opacity-50 text-white
                           font-semibold px-5 py-2 rounded-xl transition flex items-center
                           justify-center space-x-2"
                >
                    {move || checking.get().then(|| view! { <InlineLoading /> })}
                    <span>"Sign in"</span>
                </button>
            </form>
        </div>
    }
}
