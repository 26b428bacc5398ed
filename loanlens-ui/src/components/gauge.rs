//! Probability Gauge
//!
//! Circular SVG gauge filled in proportion to the approval probability.

use leptos::*;

use loanlens::PredictionResult;

const SIZE: f64 = 160.0;
const STROKE: f64 = 14.0;

/// Approval is likely from this probability up
const APPROVAL_THRESHOLD: f64 = 0.5;

/// Filled arc length and full circumference for a probability in [0, 1]
fn arc_lengths(fraction: f64) -> (f64, f64) {
    let radius = (SIZE - STROKE) / 2.0;
    let circumference = 2.0 * std::f64::consts::PI * radius;
    (circumference * fraction, circumference)
}

fn arc_class(fraction: f64) -> &'static str {
    if fraction >= APPROVAL_THRESHOLD {
        "text-green-500"
    } else {
        "text-amber-500"
    }
}

/// Gauge for one prediction
#[component]
pub fn Gauge(result: PredictionResult) -> impl IntoView {
    let fraction = result.clamped_probability();
    let (arc, circumference) = arc_lengths(fraction);
    let center = SIZE / 2.0;
    let radius = (SIZE - STROKE) / 2.0;

    view! {
        <div class="inline-block">
            <svg width=SIZE height=SIZE class="-rotate-90">
                <circle cx=center cy=center r=radius stroke="#e5e7eb" stroke-width=STROKE fill="none" />
                <circle
                    cx=center
                    cy=center
                    r=radius
                    stroke="currentColor"
                    stroke-width=STROKE
                    fill="none"
                    stroke-dasharray=format!("{} {}", arc, circumference - arc)
                    stroke-linecap="round"
                    class=arc_class(fraction)
                />
            </svg>
            <div class="text-center -mt-10 font-semibold text-xl">
                {format!("{}%", result.gauge_percent())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_bounds() {
        let (empty, circumference) = arc_lengths(0.0);
        assert_eq!(empty, 0.0);

        let (full, _) = arc_lengths(1.0);
        assert!((full - circumference).abs() < 1e-9);
    }

    #[test]
    fn test_colour_threshold() {
        assert_eq!(arc_class(0.5), "text-green-500");
        assert_eq!(arc_class(0.4999), "text-amber-500");
    }
}
