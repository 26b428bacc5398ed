//! Precomputed statistics served for the admin dashboard.
//!
//! The service aggregates; this module only derives display values
//! (percentages, rounded figures, chart slices) from what it returns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::percent;

/// Approved/rejected split over every logged prediction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassCounts {
    pub approved: u64,
    pub rejected: u64,
}

/// One bucket of the probability histogram, e.g. `{"bin": "0.50-0.55", "count": 3}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub bin: String,
    pub count: u64,
}

/// Prediction statistics from `/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total: u64,
    pub approved_rate: f64,
    pub avg_prob: f64,
    #[serde(default)]
    pub class_counts: ClassCounts,
    #[serde(default)]
    pub by_property_area: BTreeMap<String, u64>,
    #[serde(default)]
    pub prob_hist: Vec<HistogramBin>,
}

impl AggregateStats {
    /// Approval rate rounded to a whole percent, e.g. "64%"
    pub fn approval_rate_label(&self) -> String {
        percent(self.approved_rate, 0)
    }

    /// Mean probability with one decimal, e.g. "58.3%"
    pub fn avg_prob_label(&self) -> String {
        percent(self.avg_prob, 1)
    }

    /// Approvals per property area
    pub fn property_area_slices(&self) -> Vec<ChartSlice> {
        ChartSlice::from_counts(&self.by_property_area)
    }

    /// Approved vs rejected slices, in that order
    pub fn class_slices(&self) -> Vec<ChartSlice> {
        ChartSlice::from_pairs(vec![
            ("Approved".to_string(), self.class_counts.approved),
            ("Rejected".to_string(), self.class_counts.rejected),
        ])
    }

    /// Histogram buckets as slices, keeping the service's bin order
    pub fn histogram_slices(&self) -> Vec<ChartSlice> {
        ChartSlice::from_pairs(
            self.prob_hist
                .iter()
                .map(|b| (b.bin.clone(), b.count))
                .collect(),
        )
    }
}

/// Survey statistics from `/feedback-stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackStats {
    pub total: u64,
    #[serde(rename = "jobSituation", default)]
    pub job_situation: BTreeMap<String, u64>,
    #[serde(rename = "loanObjective", default)]
    pub loan_objective: BTreeMap<String, u64>,
    #[serde(rename = "purchaseDelay", default)]
    pub purchase_delay: BTreeMap<String, u64>,
    #[serde(rename = "avgContribution", default)]
    pub avg_contribution: f64,
    #[serde(default)]
    pub discovery: BTreeMap<String, u64>,
    #[serde(default)]
    pub discovery_texts: Vec<String>,
}

impl FeedbackStats {
    /// The feedback section is only worth rendering once something was collected
    pub fn has_entries(&self) -> bool {
        self.total > 0
    }

    /// Mean planned contribution rounded to whole euros, e.g. "18 500 €"
    pub fn avg_contribution_label(&self) -> String {
        let rounded = if self.avg_contribution.is_finite() {
            self.avg_contribution.round().max(0.0) as u64
        } else {
            0
        };
        format!("{} €", group_thousands(rounded))
    }
}

/// A labelled value with its share of the series total
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub value: u64,
    /// Fraction of the series total, 0 when the total is 0
    pub share: f64,
}

impl ChartSlice {
    pub fn from_counts(counts: &BTreeMap<String, u64>) -> Vec<ChartSlice> {
        Self::from_pairs(counts.iter().map(|(k, v)| (k.clone(), *v)).collect())
    }

    pub fn from_pairs(pairs: Vec<(String, u64)>) -> Vec<ChartSlice> {
        let total: u64 = pairs.iter().map(|(_, v)| *v).sum();
        pairs
            .into_iter()
            .map(|(label, value)| ChartSlice {
                label,
                value,
                share: if total == 0 {
                    0.0
                } else {
                    value as f64 / total as f64
                },
            })
            .collect()
    }

    /// Share as a whole percentage label
    pub fn share_label(&self) -> String {
        percent(self.share, 0)
    }

    /// Bar length relative to the largest value in its series, in percent
    pub fn relative_width(&self, max: u64) -> f64 {
        if max == 0 {
            0.0
        } else {
            self.value as f64 / max as f64 * 100.0
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
