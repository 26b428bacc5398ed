//! Admin Page
//!
//! Gated dashboard over prediction history and survey answers. The two
//! sources load side by side and each renders or fails on its own.

use leptos::*;

use loanlens::model::ChartSlice;
use loanlens::{AggregateStats, Dashboard, FeedbackStats, LoginForm, SourceStatus};

use crate::components::{AdminLogin, BarChart, CardSkeleton, Loading, PieChart, StatCard};
use crate::state::AppContext;

#[component]
pub fn Admin() -> impl IntoView {
    let context = expect_context::<AppContext>();
    let login = create_rw_signal(if context.open_admin {
        LoginForm::pre_granted()
    } else {
        LoginForm::new()
    });
    let granted = create_memo(move |_| login.with(LoginForm::is_granted));

    view! {
        <Show when=move || granted.get() fallback=move || view! { <AdminLogin login=login /> }>
            <AdminDashboard />
        </Show>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let context = expect_context::<AppContext>();
    let dashboard = create_rw_signal(Dashboard::new());

    let client = context.client.clone();
    spawn_local(async move {
        let loaded = Dashboard::load(&client).await;
        let _ = dashboard.try_set(loaded);
    });

    let stats = create_memo(move |_| dashboard.with(|d| d.stats.clone()));
    let feedback = create_memo(move |_| dashboard.with(|d| d.feedback_section().cloned()));
    let feedback_error = create_memo(move |_| {
        dashboard.with(|d| d.feedback.error().map(str::to_string))
    });

    view! {
        <section class="space-y-10">
            <h1 class="text-3xl font-extrabold tracking-tight text-slate-900">"Dashboard"</h1>

            {move || match stats.get() {
                SourceStatus::Loading => view! {
                    <div class="grid md:grid-cols-3 gap-4">
                        <CardSkeleton />
                        <CardSkeleton />
                        <CardSkeleton />
                    </div>
                    <Loading />
                }.into_view(),
                SourceStatus::Failed(message) => view! {
                    <p class="text-rose-600">{format!("Prediction statistics unavailable: {}", message)}</p>
                }.into_view(),
                SourceStatus::Ready(stats) => view! { <PredictionStats stats=stats /> }.into_view(),
            }}

            {move || feedback.get().map(|stats| view! { <SurveyStats stats=stats /> })}

            {move || feedback_error.get().map(|message| view! {
                <p class="text-rose-600">{format!("Survey statistics unavailable: {}", message)}</p>
            })}
        </section>
    }
}

#[component]
fn PredictionStats(stats: AggregateStats) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="grid md:grid-cols-3 gap-4">
                <StatCard title="Predictions" value=stats.total.to_string() />
                <StatCard title="Approval rate" value=stats.approval_rate_label() positive=true />
                <StatCard title="Average probability" value=stats.avg_prob_label() />
            </div>

            <div class="grid lg:grid-cols-2 gap-6">
                <BarChart title="By property area" slices=stats.property_area_slices() />
                <PieChart title="Approved vs rejected" slices=stats.class_slices() />
            </div>

            <BarChart
                title="Probability distribution"
                slices=stats.histogram_slices()
                bar_color="#10b981"
            />
        </div>
    }
}

#[component]
fn SurveyStats(stats: FeedbackStats) -> impl IntoView {
    let discovery_texts = stats.discovery_texts.clone();

    view! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold">"Survey answers"</h2>

            <div class="grid md:grid-cols-2 gap-4">
                <StatCard title="Responses" value=stats.total.to_string() />
                <StatCard title="Average contribution" value=stats.avg_contribution_label() />
            </div>

            <div class="grid lg:grid-cols-2 gap-6">
                <PieChart
                    title="Employment situation"
                    slices=ChartSlice::from_counts(&stats.job_situation)
                />
                <PieChart
                    title="Loan objective"
                    slices=ChartSlice::from_counts(&stats.loan_objective)
                />
                <BarChart
                    title="Purchase timeframe"
                    slices=ChartSlice::from_counts(&stats.purchase_delay)
                    bar_color="#f59e0b"
                />
                <BarChart
                    title="How applicants found us"
                    slices=ChartSlice::from_counts(&stats.discovery)
                    bar_color="#8b5cf6"
                />
            </div>

            {(!discovery_texts.is_empty()).then(|| view! {
                <div class="bg-white rounded-2xl shadow p-4">
                    <h3 class="font-semibold mb-3">"In their own words"</h3>
                    <ul class="list-disc pl-5 space-y-1 text-sm text-slate-700">
                        {discovery_texts
                            .into_iter()
                            .map(|text| view! { <li>{text}</li> })
                            .collect_view()}
                    </ul>
                </div>
            })}
        </div>
    }
}
