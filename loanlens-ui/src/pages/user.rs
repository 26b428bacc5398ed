//! Applicant Page
//!
//! Single estimate for an individual, followed by the optional survey.

use leptos::*;

use crate::components::{FeedbackSurvey, ProfileForm};

#[component]
pub fn User() -> impl IntoView {
    view! {
        <section class="space-y-10">
            <div class="text-center max-w-3xl mx-auto space-y-4">
                <h1 class="text-3xl md:text-5xl font-extrabold">"Mortgage simulator"</h1>
                <p class="text-lg text-slate-700">
                    "Find out how likely your mortgage is to be approved. Fill in the form \
                     below for a personalised estimate."
                </p>
                <div class="bg-blue-50 border border-blue-200 rounded-xl p-4">
                    <p class="text-slate-600 text-sm">
                        "This estimate is indicative only. For advice tailored to your \
                         situation, contact your bank or a mortgage adviser."
                    </p>
                </div>
            </div>

            <ProfileForm title="Your details" />

            <FeedbackSurvey />
        </section>
    }
}
