//! Single-applicant prediction form.

use crate::client::RequestError;
use crate::model::{ClientProfile, PredictionResult};

use super::{RequestGeneration, Ticket};

/// Profile being edited plus the outcome of the last submission.
///
/// At most one prediction is in flight. A result and an error are never
/// shown together, and both are cleared when a new submission starts.
#[derive(Debug, Clone, Default)]
pub struct SinglePredictor {
    profile: ClientProfile,
    result: Option<PredictionResult>,
    error: Option<String>,
    in_flight: Option<u64>,
    generations: RequestGeneration,
}

impl SinglePredictor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: ClientProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    pub fn profile(&self) -> &ClientProfile {
        &self.profile
    }

    /// Edits never touch a request already in flight, which carries its own copy
    pub fn profile_mut(&mut self) -> &mut ClientProfile {
        &mut self.profile
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a submission with a snapshot of the current profile.
    ///
    /// Returns `None` while another submission is in flight.
    pub fn begin_submit(&mut self) -> Option<Ticket<ClientProfile>> {
        if self.is_busy() {
            tracing::debug!("Prediction already in flight, ignoring submit");
            return None;
        }

        self.result = None;
        self.error = None;
        let generation = self.generations.advance();
        self.in_flight = Some(generation);
        Some(Ticket::new(generation, self.profile.clone()))
    }

    /// Apply the outcome of submission `generation`.
    ///
    /// Returns `false` (and changes nothing) if that submission was superseded.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<PredictionResult, RequestError>,
    ) -> bool {
        if self.in_flight != Some(generation) || !self.generations.is_current(generation) {
            tracing::debug!(generation, "Discarding stale prediction outcome");
            return false;
        }

        self.in_flight = None;
        match outcome {
            Ok(result) => {
                tracing::debug!(approved = result.is_approved(), "Prediction received");
                self.result = Some(result);
            }
            Err(err) => self.error = Some(err.message()),
        }
        true
    }

    /// Drop any in-flight submission, e.g. when the view goes away
    pub fn abandon(&mut self) {
        if self.in_flight.take().is_some() {
            self.generations.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::FakeTransport;
    use crate::client::ApiClient;
    use crate::config::ApiConfig;
    use crate::model::{AmountField, Decision};
    use serde_json::json;

    fn approved(probability: f64) -> PredictionResult {
        PredictionResult {
            prediction: Decision::Approved,
            probability,
        }
    }

    #[test]
    fn test_starts_with_default_profile() {
        let predictor = SinglePredictor::new();
        assert_eq!(predictor.profile(), &ClientProfile::default());
        assert!(!predictor.is_busy());
        assert!(predictor.result().is_none());
        assert!(predictor.error().is_none());
    }

    #[test]
    fn test_only_one_submission_in_flight() {
        let mut predictor = SinglePredictor::new();
        let ticket = predictor.begin_submit().unwrap();
        assert!(predictor.is_busy());
        assert!(predictor.begin_submit().is_none());

        assert!(predictor.complete(ticket.generation(), Ok(approved(0.7))));
        assert!(!predictor.is_busy());
        assert!(predictor.begin_submit().is_some());
    }

    #[test]
    fn test_submit_clears_previous_outcome() {
        let mut predictor = SinglePredictor::new();
        let ticket = predictor.begin_submit().unwrap();
        predictor.complete(
            ticket.generation(),
            Err(RequestError::Status {
                status: 400,
                message: "Invalid input".to_string(),
            }),
        );
        assert_eq!(predictor.error(), Some("Invalid input"));
        assert!(predictor.result().is_none());

        let ticket = predictor.begin_submit().unwrap();
        assert!(predictor.error().is_none());
        predictor.complete(ticket.generation(), Ok(approved(0.82)));
        assert!(predictor.error().is_none());
        assert_eq!(predictor.result().unwrap().probability_label(), "82.00%");
    }

    #[test]
    fn test_ticket_snapshots_profile() {
        let mut predictor = SinglePredictor::new();
        let ticket = predictor.begin_submit().unwrap();
        predictor
            .profile_mut()
            .set_amount(AmountField::LoanAmount, 1.0);

        assert_eq!(ticket.payload().loan_amount, 200_000.0);
        assert_eq!(predictor.profile().loan_amount, 1.0);
    }

    #[test]
    fn test_abandoned_outcome_is_discarded() {
        let mut predictor = SinglePredictor::new();
        let ticket = predictor.begin_submit().unwrap();
        predictor.abandon();

        assert!(!predictor.complete(ticket.generation(), Ok(approved(0.9))));
        assert!(predictor.result().is_none());
        assert!(!predictor.is_busy());
    }

    #[tokio::test]
    async fn test_submit_against_service() {
        let transport = FakeTransport::new();
        transport.respond_json("/predict-one", 200, json!({"prediction": 0, "probability": 0.12}));
        let client = ApiClient::new(transport, ApiConfig::default());

        let mut predictor = SinglePredictor::new();
        let (generation, profile) = predictor.begin_submit().unwrap().into_parts();
        let outcome = client.predict_one(&profile).await;
        assert!(predictor.complete(generation, outcome));

        let result = predictor.result().unwrap();
        assert!(!result.is_approved());
        assert_eq!(result.probability_label(), "12.00%");
    }
}
