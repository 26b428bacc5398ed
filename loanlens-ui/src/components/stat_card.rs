//! Stat Card Component
//!
//! A titled figure, used for batch summaries and dashboard headlines.

use leptos::*;

/// Stat card component
#[component]
pub fn StatCard(
    /// Caption above the value
    #[prop(into)]
    title: String,
    /// Pre-formatted value
    #[prop(into)]
    value: String,
    /// Highlight the value as a positive figure
    #[prop(optional)]
    positive: bool,
) -> impl IntoView {
    let value_class = if positive {
        "text-2xl font-bold text-emerald-600"
    } else {
        "text-2xl font-bold text-slate-900"
    };

    view! {
        <div class="bg-white rounded-xl p-4 shadow text-center">
            <div class="text-slate-500 text-sm">{title}</div>
            <div class=value_class>{value}</div>
        </div>
    }
}
