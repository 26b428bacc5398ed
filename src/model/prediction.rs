//! Prediction results returned by the service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de::{lenient_string, number_or_zero};
use super::percent;

/// Binary approval decision. Encoded as `1` (approved) or `0` (rejected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "u8")]
pub enum Decision {
    Rejected,
    Approved,
}

impl Decision {
    pub fn is_approved(&self) -> bool {
        matches!(self, Decision::Approved)
    }
}

impl From<Decision> for u8 {
    fn from(decision: Decision) -> u8 {
        match decision {
            Decision::Rejected => 0,
            Decision::Approved => 1,
        }
    }
}

impl TryFrom<Value> for Decision {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let numeric = match &value {
            Value::Number(n) => n.as_f64(),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        match numeric {
            Some(n) if n == 1.0 => Ok(Decision::Approved),
            Some(n) if n == 0.0 => Ok(Decision::Rejected),
            _ => Err(format!("invalid prediction value: {}", value)),
        }
    }
}

/// Outcome of a single prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: Decision,
    pub probability: f64,
}

impl PredictionResult {
    pub fn is_approved(&self) -> bool {
        self.prediction.is_approved()
    }

    /// Probability clamped to [0, 1] for display
    pub fn clamped_probability(&self) -> f64 {
        if self.probability.is_finite() {
            self.probability.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Probability as shown next to the decision, e.g. "82.00%"
    pub fn probability_label(&self) -> String {
        percent(self.probability, 2)
    }

    /// Rounded whole percentage shown inside the gauge
    pub fn gauge_percent(&self) -> u8 {
        (self.clamped_probability() * 100.0).round() as u8
    }
}

/// Profile columns echoed back next to each batch prediction.
///
/// Values are kept as the service sent them: categorical cells may hold
/// values outside the form's choice sets (e.g. "Unknown").
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct EchoedProfile {
    #[serde(rename = "Gender", default, deserialize_with = "lenient_string")]
    pub gender: String,
    #[serde(rename = "Married", default, deserialize_with = "lenient_string")]
    pub married: String,
    #[serde(rename = "Dependents", default, deserialize_with = "lenient_string")]
    pub dependents: String,
    #[serde(rename = "Education", default, deserialize_with = "lenient_string")]
    pub education: String,
    #[serde(rename = "Self_Employed", default, deserialize_with = "lenient_string")]
    pub self_employed: String,
    #[serde(rename = "Property_Area", default, deserialize_with = "lenient_string")]
    pub property_area: String,
    #[serde(rename = "ApplicantIncome", default, deserialize_with = "number_or_zero")]
    pub applicant_income: f64,
    #[serde(rename = "CoapplicantIncome", default, deserialize_with = "number_or_zero")]
    pub coapplicant_income: f64,
    #[serde(rename = "LoanAmount", default, deserialize_with = "number_or_zero")]
    pub loan_amount: f64,
}

impl EchoedProfile {
    /// Column label and display value pairs, in the service's column order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Gender", self.gender.clone()),
            ("Married", self.married.clone()),
            ("Dependents", self.dependents.clone()),
            ("Education", self.education.clone()),
            ("Self_Employed", self.self_employed.clone()),
            ("Property_Area", self.property_area.clone()),
            ("ApplicantIncome", format_amount(self.applicant_income)),
            ("CoapplicantIncome", format_amount(self.coapplicant_income)),
            ("LoanAmount", format_amount(self.loan_amount)),
        ]
    }
}

fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// One row of a batch result: the prediction plus the echoed profile
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchRecord {
    pub prediction: Decision,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub probability: f64,
    #[serde(flatten)]
    pub applicant: EchoedProfile,
}

impl BatchRecord {
    pub fn result(&self) -> PredictionResult {
        PredictionResult {
            prediction: self.prediction,
            probability: self.probability,
        }
    }
}
