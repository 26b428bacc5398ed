//! Optional survey submitted alongside (but independent of) predictions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::UnknownChoice;

choice_enum! {
    /// Current employment situation
    JobSituation {
        Permanent => "CDI",
        FixedTerm => "CDD",
        SelfEmployed => "Indépendant",
        Unemployed => "Sans emploi",
    }
}

choice_enum! {
    /// What the loan is for
    LoanObjective {
        PrimaryResidence => "Résidence principale",
        SecondaryResidence => "Résidence secondaire",
        RentalInvestment => "Investissement locatif",
    }
}

choice_enum! {
    /// Expected time until purchase
    PurchaseDelay {
        UnderThreeMonths => "Moins de 3 mois",
        ThreeToSixMonths => "3 à 6 mois",
        SixToTwelveMonths => "6 à 12 mois",
        OverTwelveMonths => "Plus de 12 mois",
    }
}

/// Survey answers. Every field is optional; an empty string means "not answered".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    pub job_situation: String,
    pub personal_contribution: String,
    pub loan_objective: String,
    pub purchase_delay: String,
    pub discovery: String,
}

/// Survey fields, for generic form handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackField {
    JobSituation,
    PersonalContribution,
    LoanObjective,
    PurchaseDelay,
    Discovery,
}

impl FeedbackField {
    pub const ALL: [FeedbackField; 5] = [
        FeedbackField::JobSituation,
        FeedbackField::PersonalContribution,
        FeedbackField::LoanObjective,
        FeedbackField::PurchaseDelay,
        FeedbackField::Discovery,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FeedbackField::JobSituation => "Employment situation",
            FeedbackField::PersonalContribution => "Planned personal contribution (€)",
            FeedbackField::LoanObjective => "Loan objective",
            FeedbackField::PurchaseDelay => "Planned purchase timeframe",
            FeedbackField::Discovery => "How did you hear about the simulator?",
        }
    }

    /// Allowed values for select fields; `None` for free input
    pub fn options(&self) -> Option<Vec<&'static str>> {
        match self {
            FeedbackField::JobSituation => {
                Some(JobSituation::ALL.iter().map(JobSituation::as_str).collect())
            }
            FeedbackField::LoanObjective => {
                Some(LoanObjective::ALL.iter().map(LoanObjective::as_str).collect())
            }
            FeedbackField::PurchaseDelay => {
                Some(PurchaseDelay::ALL.iter().map(PurchaseDelay::as_str).collect())
            }
            FeedbackField::PersonalContribution | FeedbackField::Discovery => None,
        }
    }
}

/// Feedback validation failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedbackError {
    #[error(transparent)]
    UnknownChoice(#[from] UnknownChoice),

    #[error("personal contribution must be a non-negative amount, got '{0}'")]
    InvalidContribution(String),
}

impl FeedbackEntry {
    pub fn get(&self, field: FeedbackField) -> &str {
        match field {
            FeedbackField::JobSituation => &self.job_situation,
            FeedbackField::PersonalContribution => &self.personal_contribution,
            FeedbackField::LoanObjective => &self.loan_objective,
            FeedbackField::PurchaseDelay => &self.purchase_delay,
            FeedbackField::Discovery => &self.discovery,
        }
    }

    pub fn set(&mut self, field: FeedbackField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FeedbackField::JobSituation => self.job_situation = value,
            FeedbackField::PersonalContribution => self.personal_contribution = value,
            FeedbackField::LoanObjective => self.loan_objective = value,
            FeedbackField::PurchaseDelay => self.purchase_delay = value,
            FeedbackField::Discovery => self.discovery = value,
        }
    }

    /// True when nothing has been answered
    pub fn is_blank(&self) -> bool {
        *self == FeedbackEntry::default()
    }

    /// Select answers must come from their option sets and the contribution
    /// must be a non-negative amount. Blank answers are always accepted.
    pub fn validate(&self) -> Result<(), FeedbackError> {
        if !self.job_situation.is_empty() {
            self.job_situation.parse::<JobSituation>()?;
        }
        if !self.loan_objective.is_empty() {
            self.loan_objective.parse::<LoanObjective>()?;
        }
        if !self.purchase_delay.is_empty() {
            self.purchase_delay.parse::<PurchaseDelay>()?;
        }

        let contribution = self.personal_contribution.trim();
        if !contribution.is_empty() {
            match contribution.parse::<f64>() {
                Ok(amount) if amount.is_finite() && amount >= 0.0 => {}
                _ => {
                    return Err(FeedbackError::InvalidContribution(
                        self.personal_contribution.clone(),
                    ))
                }
            }
        }

        Ok(())
    }
}
