//! Admin dashboard data.

use futures_util::future::join;

use crate::client::{ApiClient, RequestError, Transport};
use crate::model::{AggregateStats, FeedbackStats};

/// Load state of one dashboard source
#[derive(Debug, Clone, PartialEq)]
pub enum SourceStatus<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> SourceStatus<T> {
    pub fn from_result(result: Result<T, RequestError>) -> Self {
        match result {
            Ok(value) => SourceStatus::Ready(value),
            Err(err) => SourceStatus::Failed(err.message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SourceStatus::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            SourceStatus::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SourceStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Both dashboard sources, each loaded and failing on its own.
///
/// A failed feedback fetch does not hide the prediction statistics and
/// vice versa.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub stats: SourceStatus<AggregateStats>,
    pub feedback: SourceStatus<FeedbackStats>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            stats: SourceStatus::Loading,
            feedback: SourceStatus::Loading,
        }
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch both sources concurrently
    pub async fn load<T: Transport>(client: &ApiClient<T>) -> Self {
        let (stats, feedback) = join(client.fetch_stats(), client.fetch_feedback_stats()).await;

        let mut dashboard = Self::new();
        dashboard.apply_stats(stats);
        dashboard.apply_feedback(feedback);
        dashboard
    }

    pub fn apply_stats(&mut self, result: Result<AggregateStats, RequestError>) {
        if let Err(err) = &result {
            tracing::warn!("Failed to load prediction statistics: {}", err);
        }
        self.stats = SourceStatus::from_result(result);
    }

    pub fn apply_feedback(&mut self, result: Result<FeedbackStats, RequestError>) {
        if let Err(err) = &result {
            tracing::warn!("Failed to load feedback statistics: {}", err);
        }
        self.feedback = SourceStatus::from_result(result);
    }

    pub fn is_settled(&self) -> bool {
        !self.stats.is_loading() && !self.feedback.is_loading()
    }

    /// Feedback statistics worth a section: loaded and non-empty
    pub fn feedback_section(&self) -> Option<&FeedbackStats> {
        self.feedback.ready().filter(|stats| stats.has_entries())
    }
}
