//! Spreadsheet batch prediction.

use crate::client::RequestError;
use crate::model::{BatchRecord, UploadFile};

use super::{BatchSummary, RecordViewer, RequestGeneration, Ticket};

/// Where the batch form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPhase {
    Idle,
    FileSelected,
    Submitting,
    Resolved,
    Failed,
}

/// File selection, the last batch result and a viewer over its records.
///
/// Choosing a new file discards the previous results. If a submission is in
/// flight at that moment it is superseded and its outcome will be ignored.
#[derive(Debug, Clone)]
pub struct BatchPredictor {
    phase: BatchPhase,
    file: Option<UploadFile>,
    records: Vec<BatchRecord>,
    error: Option<String>,
    viewer: RecordViewer,
    in_flight: Option<u64>,
    generations: RequestGeneration,
}

impl Default for BatchPredictor {
    fn default() -> Self {
        Self {
            phase: BatchPhase::Idle,
            file: None,
            records: Vec::new(),
            error: None,
            viewer: RecordViewer::default(),
            in_flight: None,
            generations: RequestGeneration::new(),
        }
    }
}

impl BatchPredictor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> BatchPhase {
        self.phase
    }

    pub fn file(&self) -> Option<&UploadFile> {
        self.file.as_ref()
    }

    pub fn records(&self) -> &[BatchRecord] {
        &self.records
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.phase == BatchPhase::Submitting
    }

    /// A file is chosen and nothing is in flight
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.is_busy()
    }

    pub fn select_file(&mut self, file: UploadFile) {
        self.reset_selection();
        tracing::debug!(file = %file.name, bytes = file.size(), "Batch file selected");
        self.file = Some(file);
        self.phase = BatchPhase::FileSelected;
    }

    /// The picker was cleared
    pub fn clear_file(&mut self) {
        self.reset_selection();
        self.file = None;
        self.phase = BatchPhase::Idle;
    }

    /// Start uploading the selected file; `None` without a file or while busy
    pub fn begin_submit(&mut self) -> Option<Ticket<UploadFile>> {
        if !self.can_submit() {
            return None;
        }
        let file = self.file.clone()?;

        self.records.clear();
        self.error = None;
        self.viewer = RecordViewer::default();

        let generation = self.generations.advance();
        self.in_flight = Some(generation);
        self.phase = BatchPhase::Submitting;
        Some(Ticket::new(generation, file))
    }

    /// Apply the outcome of submission `generation`; stale outcomes return `false`
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<Vec<BatchRecord>, RequestError>,
    ) -> bool {
        if self.in_flight != Some(generation) || !self.generations.is_current(generation) {
            tracing::debug!(generation, "Discarding stale batch outcome");
            return false;
        }

        self.in_flight = None;
        match outcome {
            Ok(records) => {
                tracing::debug!(records = records.len(), "Batch resolved");
                self.viewer = RecordViewer::new(records.len());
                self.records = records;
                self.phase = BatchPhase::Resolved;
            }
            Err(err) => {
                self.records.clear();
                self.viewer = RecordViewer::default();
                self.error = Some(err.message());
                self.phase = BatchPhase::Failed;
            }
        }
        true
    }

    /// Drop any in-flight submission without touching the selection
    pub fn abandon(&mut self) {
        if self.in_flight.take().is_some() {
            self.generations.advance();
            self.phase = if self.file.is_some() {
                BatchPhase::FileSelected
            } else {
                BatchPhase::Idle
            };
        }
    }

    /// `None` until a non-empty batch has resolved
    pub fn summary(&self) -> Option<BatchSummary> {
        BatchSummary::from_records(&self.records)
    }

    pub fn viewer(&self) -> RecordViewer {
        self.viewer
    }

    /// The record under the viewer
    pub fn current(&self) -> Option<&BatchRecord> {
        self.records.get(self.viewer.index())
    }

    pub fn previous(&mut self) -> bool {
        self.viewer.previous()
    }

    pub fn next(&mut self) -> bool {
        self.viewer.next()
    }

    fn reset_selection(&mut self) {
        if self.in_flight.take().is_some() {
            tracing::debug!("Superseding in-flight batch submission");
            self.generations.advance();
        }
        self.records.clear();
        self.error = None;
        self.viewer = RecordViewer::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::FakeTransport;
    use crate::client::ApiClient;
    use crate::config::ApiConfig;
    use crate::model::Decision;
    use serde_json::json;

    fn record(prediction: u8, probability: f64) -> BatchRecord {
        serde_json::from_value(json!({
            "Gender": "Male",
            "prediction": prediction,
            "probability": probability
        }))
        .unwrap()
    }

    fn csv(name: &str) -> UploadFile {
        UploadFile::new(name, b"Gender\nMale\n".to_vec()).with_content_type("text/csv")
    }

    #[test]
    fn test_cannot_submit_without_file() {
        let mut batch = BatchPredictor::new();
        assert_eq!(batch.phase(), BatchPhase::Idle);
        assert!(!batch.can_submit());
        assert!(batch.begin_submit().is_none());
    }

    #[test]
    fn test_resolved_batch_summary_and_viewer() {
        let mut batch = BatchPredictor::new();
        batch.select_file(csv("clients.csv"));
        assert_eq!(batch.phase(), BatchPhase::FileSelected);

        let ticket = batch.begin_submit().unwrap();
        assert_eq!(batch.phase(), BatchPhase::Submitting);
        assert!(!batch.can_submit());
        assert!(batch.begin_submit().is_none());

        let records = vec![record(1, 0.9), record(0, 0.3), record(1, 0.6)];
        assert!(batch.complete(ticket.generation(), Ok(records)));
        assert_eq!(batch.phase(), BatchPhase::Resolved);

        let summary = batch.summary().unwrap();
        assert_eq!((summary.total, summary.approved, summary.rejected), (3, 2, 1));
        assert!((summary.avg_prob - 0.6).abs() < 1e-9);

        assert_eq!(batch.viewer().index(), 0);
        assert!(!batch.previous());
        assert!(batch.next());
        assert_eq!(batch.current().unwrap().prediction, Decision::Rejected);
        assert!(batch.next());
        assert!(!batch.next());
        assert_eq!(batch.viewer().index(), 2);
    }

    #[test]
    fn test_failed_batch_keeps_file() {
        let mut batch = BatchPredictor::new();
        batch.select_file(csv("broken.csv"));
        let ticket = batch.begin_submit().unwrap();

        batch.complete(
            ticket.generation(),
            Err(RequestError::Status {
                status: 422,
                message: "Missing column LoanAmount".to_string(),
            }),
        );
        assert_eq!(batch.phase(), BatchPhase::Failed);
        assert_eq!(batch.error(), Some("Missing column LoanAmount"));
        assert!(batch.summary().is_none());
        assert!(batch.current().is_none());
        assert!(batch.can_submit());
    }

    #[test]
    fn test_empty_batch_has_no_summary() {
        let mut batch = BatchPredictor::new();
        batch.select_file(csv("empty.csv"));
        let ticket = batch.begin_submit().unwrap();
        batch.complete(ticket.generation(), Ok(Vec::new()));

        assert_eq!(batch.phase(), BatchPhase::Resolved);
        assert!(batch.summary().is_none());
        assert!(batch.viewer().is_empty());
    }

    #[test]
    fn test_new_file_clears_results() {
        let mut batch = BatchPredictor::new();
        batch.select_file(csv("first.csv"));
        let ticket = batch.begin_submit().unwrap();
        batch.complete(ticket.generation(), Ok(vec![record(1, 0.8), record(1, 0.7)]));
        batch.next();

        batch.select_file(csv("second.csv"));
        assert_eq!(batch.phase(), BatchPhase::FileSelected);
        assert!(batch.records().is_empty());
        assert!(batch.summary().is_none());
        assert_eq!(batch.viewer().index(), 0);
        assert_eq!(batch.file().unwrap().name, "second.csv");
    }

    #[test]
    fn test_new_file_supersedes_in_flight_batch() {
        let mut batch = BatchPredictor::new();
        batch.select_file(csv("first.csv"));
        let stale = batch.begin_submit().unwrap();

        batch.select_file(csv("second.csv"));
        assert_eq!(batch.phase(), BatchPhase::FileSelected);
        assert!(batch.can_submit());

        assert!(!batch.complete(stale.generation(), Ok(vec![record(1, 0.9)])));
        assert!(batch.records().is_empty());
        assert_eq!(batch.phase(), BatchPhase::FileSelected);
    }

    #[test]
    fn test_clear_file_returns_to_idle() {
        let mut batch = BatchPredictor::new();
        batch.select_file(csv("clients.csv"));
        batch.clear_file();
        assert_eq!(batch.phase(), BatchPhase::Idle);
        assert!(batch.file().is_none());
        assert!(!batch.can_submit());
    }

    #[tokio::test]
    async fn test_submit_against_service() {
        let transport = FakeTransport::new();
        transport.respond_json(
            "/predict-batch-file",
            200,
            json!([
                {"Gender": "Male", "LoanAmount": 120, "prediction": 1, "probability": 0.9},
                {"Gender": "Female", "LoanAmount": "80", "prediction": 0, "probability": 0.3},
                {"Gender": "Male", "LoanAmount": 200, "prediction": 1, "probability": 0.6}
            ]),
        );
        let client = ApiClient::new(transport, ApiConfig::default());

        let mut batch = BatchPredictor::new();
        batch.select_file(csv("clients.csv"));
        let (generation, file) = batch.begin_submit().unwrap().into_parts();
        let outcome = client.predict_batch(&file).await;
        assert!(batch.complete(generation, outcome));

        assert_eq!(batch.records().len(), 3);
        let summary = batch.summary().unwrap();
        assert_eq!(summary.approved, 2);
        assert_eq!(summary.avg_prob_label(), "60.0%");
    }
}
