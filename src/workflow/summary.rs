//! Aggregate figures derived from a batch result.

use crate::model::{percent, BatchRecord, PredictionResult};

/// Counts and mean probability over a batch.
///
/// Always derived from the records, never edited: `approved + rejected ==
/// total` and `avg_prob` lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSummary {
    pub total: usize,
    pub approved: usize,
    pub rejected: usize,
    pub avg_prob: f64,
}

impl BatchSummary {
    /// `None` for an empty batch, so there is no 0/0 average
    pub fn from_records(records: &[BatchRecord]) -> Option<Self> {
        Self::from_results(records.iter().map(BatchRecord::result))
    }

    pub fn from_results<I>(results: I) -> Option<Self>
    where
        I: IntoIterator<Item = PredictionResult>,
    {
        let mut total = 0usize;
        let mut approved = 0usize;
        let mut prob_sum = 0.0f64;

        for result in results {
            total += 1;
            if result.is_approved() {
                approved += 1;
            }
            // Out-of-range probabilities would break the [0, 1] mean
            prob_sum += result.clamped_probability();
        }

        if total == 0 {
            return None;
        }

        Some(Self {
            total,
            approved,
            rejected: total - approved,
            avg_prob: (prob_sum / total as f64).clamp(0.0, 1.0),
        })
    }

    /// Mean probability with one decimal, e.g. "60.0%"
    pub fn avg_prob_label(&self) -> String {
        percent(self.avg_prob, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Decision;

    fn results(pairs: &[(u8, f64)]) -> Vec<PredictionResult> {
        pairs
            .iter()
            .map(|&(p, probability)| PredictionResult {
                prediction: if p == 1 {
                    Decision::Approved
                } else {
                    Decision::Rejected
                },
                probability,
            })
            .collect()
    }

    #[test]
    fn test_three_record_scenario() {
        let summary =
            BatchSummary::from_results(results(&[(1, 0.9), (0, 0.3), (1, 0.6)])).unwrap();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.approved, 2);
        assert_eq!(summary.rejected, 1);
        assert!((summary.avg_prob - 0.6).abs() < 1e-9);
        assert_eq!(summary.avg_prob_label(), "60.0%");
    }

    #[test]
    fn test_empty_batch_has_no_summary() {
        assert!(BatchSummary::from_results(Vec::new()).is_none());
        assert!(BatchSummary::from_records(&[]).is_none());
    }

    #[test]
    fn test_counts_always_add_up() {
        let batches = [
            vec![(0, 0.1)],
            vec![(1, 1.0), (1, 0.99)],
            vec![(0, 0.0), (1, 0.5), (0, 0.49), (1, 0.51), (0, 0.2)],
        ];

        for batch in batches.iter() {
            let summary = BatchSummary::from_results(results(batch)).unwrap();
            assert_eq!(summary.approved + summary.rejected, summary.total);
            assert_eq!(summary.total, batch.len());
            assert!((0.0..=1.0).contains(&summary.avg_prob));
        }
    }

    #[test]
    fn test_out_of_range_probabilities_stay_bounded() {
        let summary =
            BatchSummary::from_results(results(&[(1, 1.8), (1, 2.5), (0, f64::NAN)])).unwrap();
        assert!((0.0..=1.0).contains(&summary.avg_prob));
    }
}
