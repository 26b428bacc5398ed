//! Applicant profile submitted for a single prediction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::UnknownChoice;

choice_enum! {
    /// Applicant gender
    Gender {
        Male => "Male",
        Female => "Female",
    }
}

choice_enum! {
    /// Yes/No answer, used for marital and self-employment status
    YesNo {
        Yes => "Yes",
        No => "No",
    }
}

choice_enum! {
    /// Number of dependents, capped at "3+"
    Dependents {
        Zero => "0",
        One => "1",
        Two => "2",
        ThreePlus => "3+",
    }
}

choice_enum! {
    /// Education level
    Education {
        Graduate => "Graduate",
        NotGraduate => "Not Graduate",
    }
}

choice_enum! {
    /// Location of the financed property
    PropertyArea {
        Urban => "Urban",
        Semiurban => "Semiurban",
        Rural => "Rural",
    }
}

/// Applicant attributes sent to `predict-one`.
///
/// Field names on the wire follow the service's column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Married")]
    pub married: YesNo,
    #[serde(rename = "Dependents")]
    pub dependents: Dependents,
    #[serde(rename = "Education")]
    pub education: Education,
    #[serde(rename = "Self_Employed")]
    pub self_employed: YesNo,
    #[serde(rename = "Property_Area")]
    pub property_area: PropertyArea,
    #[serde(rename = "ApplicantIncome")]
    pub applicant_income: f64,
    #[serde(rename = "CoapplicantIncome")]
    pub coapplicant_income: f64,
    #[serde(rename = "LoanAmount")]
    pub loan_amount: f64,
}

impl Default for ClientProfile {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            married: YesNo::Yes,
            dependents: Dependents::Zero,
            education: Education::Graduate,
            self_employed: YesNo::No,
            property_area: PropertyArea::Urban,
            applicant_income: 5000.0,
            coapplicant_income: 2000.0,
            loan_amount: 200_000.0,
        }
    }
}

/// The six categorical profile fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceField {
    Gender,
    Married,
    Dependents,
    Education,
    SelfEmployed,
    PropertyArea,
}

impl ChoiceField {
    pub const ALL: [ChoiceField; 6] = [
        ChoiceField::Gender,
        ChoiceField::Married,
        ChoiceField::Dependents,
        ChoiceField::Education,
        ChoiceField::SelfEmployed,
        ChoiceField::PropertyArea,
    ];

    /// Column name used by the service and as the form label
    pub fn label(&self) -> &'static str {
        match self {
            ChoiceField::Gender => "Gender",
            ChoiceField::Married => "Married",
            ChoiceField::Dependents => "Dependents",
            ChoiceField::Education => "Education",
            ChoiceField::SelfEmployed => "Self_Employed",
            ChoiceField::PropertyArea => "Property_Area",
        }
    }

    /// Allowed wire values
    pub fn options(&self) -> Vec<&'static str> {
        match self {
            ChoiceField::Gender => Gender::ALL.iter().map(Gender::as_str).collect(),
            ChoiceField::Married | ChoiceField::SelfEmployed => {
                YesNo::ALL.iter().map(YesNo::as_str).collect()
            }
            ChoiceField::Dependents => Dependents::ALL.iter().map(Dependents::as_str).collect(),
            ChoiceField::Education => Education::ALL.iter().map(Education::as_str).collect(),
            ChoiceField::PropertyArea => {
                PropertyArea::ALL.iter().map(PropertyArea::as_str).collect()
            }
        }
    }
}

/// The three numeric profile fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountField {
    ApplicantIncome,
    CoapplicantIncome,
    LoanAmount,
}

impl AmountField {
    pub const ALL: [AmountField; 3] = [
        AmountField::ApplicantIncome,
        AmountField::CoapplicantIncome,
        AmountField::LoanAmount,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AmountField::ApplicantIncome => "ApplicantIncome",
            AmountField::CoapplicantIncome => "CoapplicantIncome",
            AmountField::LoanAmount => "LoanAmount",
        }
    }
}

/// Client-side profile validation failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("{0} cannot be negative")]
    Negative(&'static str),

    #[error("{0} must be a number")]
    NotFinite(&'static str),
}

impl ClientProfile {
    /// Current wire value of a categorical field
    pub fn choice(&self, field: ChoiceField) -> &'static str {
        match field {
            ChoiceField::Gender => self.gender.as_str(),
            ChoiceField::Married => self.married.as_str(),
            ChoiceField::Dependents => self.dependents.as_str(),
            ChoiceField::Education => self.education.as_str(),
            ChoiceField::SelfEmployed => self.self_employed.as_str(),
            ChoiceField::PropertyArea => self.property_area.as_str(),
        }
    }

    /// Set a categorical field from its wire value
    pub fn set_choice(&mut self, field: ChoiceField, value: &str) -> Result<(), UnknownChoice> {
        match field {
            ChoiceField::Gender => self.gender = value.parse()?,
            ChoiceField::Married => self.married = value.parse()?,
            ChoiceField::Dependents => self.dependents = value.parse()?,
            ChoiceField::Education => self.education = value.parse()?,
            ChoiceField::SelfEmployed => self.self_employed = value.parse()?,
            ChoiceField::PropertyArea => self.property_area = value.parse()?,
        }
        Ok(())
    }

    pub fn amount(&self, field: AmountField) -> f64 {
        match field {
            AmountField::ApplicantIncome => self.applicant_income,
            AmountField::CoapplicantIncome => self.coapplicant_income,
            AmountField::LoanAmount => self.loan_amount,
        }
    }

    pub fn set_amount(&mut self, field: AmountField, value: f64) {
        match field {
            AmountField::ApplicantIncome => self.applicant_income = value,
            AmountField::CoapplicantIncome => self.coapplicant_income = value,
            AmountField::LoanAmount => self.loan_amount = value,
        }
    }

    /// Check the numeric fields before sending
    pub fn validate(&self) -> Result<(), ProfileError> {
        for field in AmountField::ALL {
            let value = self.amount(field);
            if !value.is_finite() {
                return Err(ProfileError::NotFinite(field.label()));
            }
            if value < 0.0 {
                return Err(ProfileError::Negative(field.label()));
            }
        }
        Ok(())
    }
}
