//! Chart Components
//!
//! Lightweight HTML/CSS charts over precomputed [`ChartSlice`] series.

use leptos::*;

use loanlens::model::ChartSlice;

/// Series colors, cycled per slice
const SERIES_COLORS: [&str; 7] = [
    "#10b981", // Emerald
    "#3b82f6", // Blue
    "#f59e0b", // Amber
    "#ef4444", // Red
    "#8b5cf6", // Violet
    "#14b8a6", // Teal
    "#6366f1", // Indigo
];

fn color(index: usize) -> &'static str {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// `conic-gradient` stops for a pie of `slices`
fn conic_gradient(slices: &[ChartSlice]) -> String {
    if slices.iter().all(|s| s.value == 0) {
        return "#e5e7eb".to_string();
    }

    let mut start = 0.0;
    let stops: Vec<String> = slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let end = start + slice.share * 100.0;
            let stop = format!("{} {:.2}% {:.2}%", color(i), start, end);
            start = end;
            stop
        })
        .collect();

    format!("conic-gradient({})", stops.join(", "))
}

/// Card frame shared by the charts
#[component]
fn ChartFrame(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow p-4">
            <h3 class="font-semibold mb-3">{title}</h3>
            {children()}
        </div>
    }
}

/// Horizontal bar chart
#[component]
pub fn BarChart(
    #[prop(into)]
    title: String,
    slices: Vec<ChartSlice>,
    #[prop(default = "#3b82f6")]
    bar_color: &'static str,
) -> impl IntoView {
    let max = slices.iter().map(|s| s.value).max().unwrap_or(0);

    view! {
        <ChartFrame title=title>
            {if slices.is_empty() {
                view! { <p class="text-slate-400 text-sm">"No data"</p> }.into_view()
            } else {
                slices
                    .into_iter()
                    .map(|slice| {
                        let width = slice.relative_width(max);
                        view! {
                            <div class="flex items-center gap-3 py-1 text-sm">
                                <span class="w-40 truncate text-slate-600">{slice.label}</span>
                                <div class="flex-1 bg-slate-100 rounded h-4">
                                    <div
                                        class="h-4 rounded"
                                        style=format!("width: {:.1}%; background-color: {}", width, bar_color)
                                    />
                                </div>
                                <span class="w-10 text-right font-medium">{slice.value}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </ChartFrame>
    }
}

/// Pie chart with legend
#[component]
pub fn PieChart(
    #[prop(into)]
    title: String,
    slices: Vec<ChartSlice>,
) -> impl IntoView {
    let background = conic_gradient(&slices);

    view! {
        <ChartFrame title=title>
            <div class="flex items-center gap-6">
                <div
                    class="w-40 h-40 rounded-full shrink-0"
                    style=format!("background: {}", background)
                />
                <ul class="space-y-1 text-sm">
                    {slices
                        .into_iter()
                        .enumerate()
                        .map(|(i, slice)| view! {
                            <li class="flex items-center gap-2">
                                <span
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color(i))
                                />
                                <span class="text-slate-600">{slice.label.clone()}</span>
                                <span class="font-medium">
                                    {format!("{} ({})", slice.value, slice.share_label())}
                                </span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </ChartFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conic_gradient_covers_full_circle() {
        let slices = ChartSlice::from_pairs(vec![
            ("Approved".to_string(), 3),
            ("Rejected".to_string(), 1),
        ]);
        let gradient = conic_gradient(&slices);
        assert!(gradient.starts_with("conic-gradient("));
        assert!(gradient.contains("0.00% 75.00%"));
        assert!(gradient.contains("75.00% 100.00%"));
    }

    #[test]
    fn test_empty_pie_is_grey() {
        let slices = ChartSlice::from_pairs(vec![("Approved".to_string(), 0)]);
        assert_eq!(conic_gradient(&slices), "#e5e7eb");
    }
}
