//! Batch Viewer Component
//!
//! Summary cards and one-record-at-a-time review of a batch result.

use leptos::*;

use loanlens::BatchPredictor;

use super::{PredictionCard, StatCard};

/// Summary plus record viewer; renders nothing until a non-empty batch resolves
#[component]
pub fn BatchViewer(batch: RwSignal<BatchPredictor>) -> impl IntoView {
    let summary = create_memo(move |_| batch.with(BatchPredictor::summary));
    let viewer = create_memo(move |_| batch.with(BatchPredictor::viewer));
    let current = create_memo(move |_| batch.with(|b| b.current().cloned()));

    view! {
        {move || summary.get().map(|summary| view! {
            <div class="grid md:grid-cols-3 gap-3 mt-2">
                <StatCard title="Total applications" value=summary.total.to_string() />
                <StatCard title="Approvals" value=summary.approved.to_string() positive=true />
                <StatCard title="Average probability" value=summary.avg_prob_label() />
            </div>
        })}

        {move || current.get().map(|record| view! {
            <div class="mt-4 p-4 border rounded-2xl">
                <div class="flex items-center justify-between">
                    <h3 class="text-lg font-semibold">
                        "Application " {move || viewer.get().position_label().unwrap_or_default()}
                    </h3>
                    <div class="flex gap-2">
                        <button
                            class="px-3 py-1 rounded-lg border hover:bg-slate-50 disabled:opacity-40"
                            disabled=move || !viewer.get().has_previous()
                            on:click=move |_| { batch.update(|b| { b.previous(); }); }
                        >
                            "← Previous"
                        </button>
                        <button
                            class="px-3 py-1 rounded-lg border hover:bg-slate-50 disabled:opacity-40"
                            disabled=move || !viewer.get().has_next()
                            on:click=move |_| { batch.update(|b| { b.next(); }); }
                        >
                            "Next →"
                        </button>
                    </div>
                </div>

                <div class="mt-4">
                    <PredictionCard result=record.result() />
                </div>

                <details class="mt-4">
                    <summary class="cursor-pointer text-sm text-slate-700">
                        "Show applicant details"
                    </summary>
                    <div class="grid md:grid-cols-3 gap-3 text-sm mt-3">
                        {record
                            .applicant
                            .fields()
                            .into_iter()
                            .map(|(label, value)| view! {
                                <div class="p-2 rounded-lg bg-slate-50">
                                    <div class="text-slate-500">{label}</div>
                                    <div class="font-medium">{value}</div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </details>
            </div>
        })}
    }
}
