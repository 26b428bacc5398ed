//! Domain Model
//!
//! Request and response shapes exchanged with the loan-approval service:
//! applicant profiles, predictions, survey feedback and dashboard statistics.

use thiserror::Error;

/// Declares a closed set of string choices with a stable wire value per variant.
///
/// Generates `ALL`, `as_str`, `Display`, `FromStr` and serde support using the
/// wire values, so form selects and request bodies share one source of truth.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every choice, in display order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Wire value sent to the service
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::UnknownChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    other => Err($crate::model::UnknownChoice {
                        field: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

mod de;
pub mod feedback;
pub mod file;
pub mod prediction;
pub mod profile;
pub mod stats;

pub use feedback::{
    FeedbackEntry, FeedbackError, FeedbackField, JobSituation, LoanObjective, PurchaseDelay,
};
pub use file::{TemplateFile, UploadFile};
pub use prediction::{BatchRecord, Decision, EchoedProfile, PredictionResult};
pub use profile::{
    AmountField, ChoiceField, ClientProfile, Dependents, Education, Gender, ProfileError,
    PropertyArea, YesNo,
};
pub use stats::{AggregateStats, ChartSlice, ClassCounts, FeedbackStats, HistogramBin};

/// A value that is not part of a closed choice set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {field}")]
pub struct UnknownChoice {
    pub field: &'static str,
    pub value: String,
}

/// Formats a fraction in [0, 1] as a percentage with the given precision.
///
/// Values outside the range are clamped; non-finite values render as 0.
pub fn percent(fraction: f64, decimals: usize) -> String {
    let clamped = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    format!("{:.*}%", decimals, clamped * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_precision() {
        assert_eq!(percent(0.82, 2), "82.00%");
        assert_eq!(percent(0.6, 1), "60.0%");
        assert_eq!(percent(0.456, 0), "46%");
    }

    #[test]
    fn test_percent_clamps() {
        assert_eq!(percent(1.7, 0), "100%");
        assert_eq!(percent(-0.2, 1), "0.0%");
        assert_eq!(percent(f64::NAN, 2), "0.00%");
    }

    #[test]
    fn test_unknown_choice_display() {
        let err = "Divorced".parse::<YesNo>().unwrap_err();
        assert_eq!(err.to_string(), "'Divorced' is not a valid YesNo");
    }
}
