//! Home Page
//!
//! Landing page with the three entry points.

use leptos::*;
use leptos_router::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-16">
            <section class="rounded-2xl bg-gradient-to-br from-blue-700 to-slate-900 px-6 py-20 text-center">
                <h1 class="text-4xl md:text-5xl font-extrabold text-white max-w-3xl mx-auto">
                    "Estimate your chances of getting a mortgage approved"
                </h1>
                <p class="mt-4 text-lg text-slate-200 max-w-2xl mx-auto">
                    "A fast, free simulator for applicants and banks."
                </p>
                <div class="mt-6 flex justify-center gap-4">
                    <A
                        href="/user"
                        class="px-6 py-3 rounded-xl bg-blue-600 hover:bg-blue-700 text-white font-semibold transition"
                    >
                        "Try it now"
                    </A>
                    <A
                        href="/bank"
                        class="px-6 py-3 rounded-xl bg-white/90 hover:bg-white text-slate-800 font-semibold transition"
                    >
                        "Bank workspace"
                    </A>
                </div>
            </section>

            <section class="max-w-6xl mx-auto text-center space-y-10">
                <h2 class="text-2xl font-bold text-slate-800">"How it works"</h2>
                <div class="grid md:grid-cols-3 gap-8">
                    <Step number=1 title="Fill in your details" desc="Income, household and the amount you want to borrow." />
                    <Step number=2 title="The model scores it" desc="A predictive model estimates your eligibility in seconds." />
                    <Step number=3 title="Take action" desc="Talk to a bank to turn the estimate into a real project." />
                </div>
            </section>

            <section class="max-w-6xl mx-auto grid md:grid-cols-3 gap-6">
                <EntryCard title="👤 Applicant" desc="Estimate your chances and try different scenarios." href="/user" />
                <EntryCard title="🏦 Bank" desc="Score applications one by one or as a CSV/XLSX batch." href="/bank" />
                <EntryCard title="📊 Admin" desc="Review global statistics and user feedback." href="/admin" />
            </section>
        </div>
    }
}

#[component]
fn Step(number: u8, title: &'static str, desc: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center">
            <div class="w-12 h-12 flex items-center justify-center rounded-full bg-blue-600 text-white text-xl font-bold">
                {number}
            </div>
            <h3 class="mt-4 text-lg font-semibold">{title}</h3>
            <p class="text-slate-600 mt-2">{desc}</p>
        </div>
    }
}

#[component]
fn EntryCard(title: &'static str, desc: &'static str, href: &'static str) -> impl IntoView {
    view! {
        <A href=href class="block bg-white rounded-2xl shadow p-6 hover:shadow-lg transition">
            <h3 class="text-xl font-semibold">{title}</h3>
            <p class="text-slate-600 mt-2">{desc}</p>
        </A>
    }
}
