//! Prediction Card
//!
//! Gauge plus the decision and exact probability for one result.

use leptos::*;

use loanlens::PredictionResult;

use super::Gauge;

#[component]
pub fn PredictionCard(result: PredictionResult) -> impl IntoView {
    let verdict = if result.is_approved() {
        view! { <p class="text-emerald-600 font-semibold text-lg">"✅ Loan likely to be APPROVED"</p> }
    } else {
        view! { <p class="text-rose-600 font-semibold text-lg">"❌ Loan likely to be REJECTED"</p> }
    };

    view! {
        <div class="flex items-center gap-6">
            <Gauge result=result />
            <div>
                <h3 class="text-lg font-semibold mb-1">"Result"</h3>
                {verdict}
                <p class="text-slate-600 mt-2 text-sm">
                    "Estimated probability: " {result.probability_label()}
                </p>
            </div>
        </div>
    }
}
