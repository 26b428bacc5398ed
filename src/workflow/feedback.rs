//! Optional satisfaction survey on the user page.

use crate::client::{Acknowledgement, RequestError};
use crate::model::{FeedbackEntry, FeedbackField};

use super::{RequestGeneration, Ticket};

/// Survey answers and the "thank you" flag.
///
/// Sending is best-effort: a failed submission is logged and otherwise
/// leaves the form exactly as it was. A successful one resets the answers
/// and raises `saved` until the caller dismisses it.
#[derive(Debug, Clone, Default)]
pub struct FeedbackForm {
    entry: FeedbackEntry,
    saved: bool,
    invalid: Option<String>,
    in_flight: Option<u64>,
    generations: RequestGeneration,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self) -> &FeedbackEntry {
        &self.entry
    }

    pub fn get(&self, field: FeedbackField) -> &str {
        self.entry.get(field)
    }

    pub fn set(&mut self, field: FeedbackField, value: impl Into<String>) {
        self.entry.set(field, value);
        self.invalid = None;
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The "thank you" notice is showing
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Client-side validation message from the last attempt
    pub fn invalid(&self) -> Option<&str> {
        self.invalid.as_deref()
    }

    /// Snapshot the answers for sending.
    ///
    /// Returns `None` while a submission is in flight or when an answer is
    /// outside its option set; in the latter case `invalid` is set and
    /// nothing is sent.
    pub fn begin_submit(&mut self) -> Option<Ticket<FeedbackEntry>> {
        if self.is_sending() {
            return None;
        }
        if let Err(err) = self.entry.validate() {
            self.invalid = Some(err.to_string());
            return None;
        }

        self.invalid = None;
        self.saved = false;
        let generation = self.generations.advance();
        self.in_flight = Some(generation);
        Some(Ticket::new(generation, self.entry.clone()))
    }

    /// Returns whether the "thank you" notice should now be shown
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<Acknowledgement, RequestError>,
    ) -> bool {
        if self.in_flight != Some(generation) || !self.generations.is_current(generation) {
            return false;
        }
        self.in_flight = None;

        match outcome {
            Ok(ack) => {
                tracing::debug!(status = ?ack.status, "Feedback stored");
                self.entry = FeedbackEntry::default();
                self.saved = true;
                true
            }
            Err(err) => {
                tracing::warn!("Feedback submission failed: {}", err);
                false
            }
        }
    }

    /// Hide the "thank you" notice
    pub fn dismiss_saved(&mut self) {
        self.saved = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::FakeTransport;
    use crate::client::ApiClient;
    use crate::config::ApiConfig;
    use serde_json::json;

    fn filled() -> FeedbackForm {
        let mut form = FeedbackForm::new();
        form.set(FeedbackField::JobSituation, "CDI");
        form.set(FeedbackField::PersonalContribution, "15000");
        form.set(FeedbackField::LoanObjective, "Résidence principale");
        form.set(FeedbackField::PurchaseDelay, "3 à 6 mois");
        form.set(FeedbackField::Discovery, "Un ami");
        form
    }

    #[test]
    fn test_success_resets_and_thanks() {
        let mut form = filled();
        let ticket = form.begin_submit().unwrap();
        assert!(form.is_sending());
        assert!(form.begin_submit().is_none());

        assert!(form.complete(ticket.generation(), Ok(Acknowledgement::default())));
        assert!(form.is_saved());
        assert!(!form.is_sending());
        assert!(form.entry().is_blank());

        form.dismiss_saved();
        assert!(!form.is_saved());
    }

    #[test]
    fn test_failure_leaves_form_unchanged() {
        let mut form = filled();
        let before = form.entry().clone();
        let ticket = form.begin_submit().unwrap();

        let shown = form.complete(
            ticket.generation(),
            Err(RequestError::Network("offline".to_string())),
        );
        assert!(!shown);
        assert!(!form.is_saved());
        assert!(!form.is_sending());
        assert_eq!(form.entry(), &before);
    }

    #[test]
    fn test_out_of_set_answer_is_not_sent() {
        let mut form = FeedbackForm::new();
        form.set(FeedbackField::PurchaseDelay, "Demain");

        assert!(form.begin_submit().is_none());
        assert!(form.invalid().is_some());
        assert!(!form.is_sending());

        form.set(FeedbackField::PurchaseDelay, "Moins de 3 mois");
        assert!(form.invalid().is_none());
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_blank_form_can_be_sent() {
        let mut form = FeedbackForm::new();
        assert!(form.begin_submit().is_some());
    }

    #[tokio::test]
    async fn test_submit_against_service() {
        let transport = FakeTransport::new();
        transport.respond_json("/feedback", 200, json!({"status": "ok"}));
        let client = ApiClient::new(transport, ApiConfig::default());

        let mut form = filled();
        let (generation, entry) = form.begin_submit().unwrap().into_parts();
        let outcome = client.submit_feedback(&entry).await;
        assert!(form.complete(generation, outcome));

        let requests = client.transport().requests();
        let body = match &requests[0].body {
            crate::client::RequestBody::Json(bytes) => {
                serde_json::from_slice::<serde_json::Value>(bytes).unwrap()
            }
            other => panic!("expected JSON body, got {:?}", other),
        };
        assert_eq!(body["jobSituation"], "CDI");
        assert_eq!(body["personalContribution"], "15000");
    }

    #[tokio::test]
    async fn test_service_error_is_swallowed() {
        let transport = FakeTransport::new();
        transport.respond_text("/feedback", 500, "Internal Server Error");
        let client = ApiClient::new(transport, ApiConfig::default());

        let mut form = filled();
        let (generation, entry) = form.begin_submit().unwrap().into_parts();
        let outcome = client.submit_feedback(&entry).await;
        assert!(!form.complete(generation, outcome));
        assert!(!form.is_saved());
        assert_eq!(form.get(FeedbackField::JobSituation), "CDI");
    }
}
