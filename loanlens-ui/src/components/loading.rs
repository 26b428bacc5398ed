//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-section loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Skeleton loader for stat cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-4 shadow animate-pulse">
            <div class="h-4 bg-slate-200 rounded w-1/3 mx-auto mb-3" />
            <div class="h-8 bg-slate-200 rounded w-1/2 mx-auto" />
        </div>
    }
}
