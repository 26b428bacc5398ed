//! View-State Workflows
//!
//! Framework-agnostic state for each page: the single and batch predictors,
//! the feedback form, the admin login and the dashboard.
//!
//! Submissions follow one protocol. `begin_submit` hands out a [`Ticket`]
//! stamped with a fresh generation and marks the form busy; the caller
//! performs the request and passes the outcome to `complete` with the same
//! generation. Outcomes from superseded generations are dropped, so a late
//! response can never overwrite newer state.

pub mod batch;
pub mod dashboard;
pub mod feedback;
pub mod login;
pub mod single;
pub mod summary;
pub mod viewer;

pub use batch::{BatchPhase, BatchPredictor};
pub use dashboard::{Dashboard, SourceStatus};
pub use feedback::FeedbackForm;
pub use login::LoginForm;
pub use single::SinglePredictor;
pub use summary::BatchSummary;
pub use viewer::RecordViewer;

/// Monotonically increasing submission counter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, invalidating every earlier one
    pub fn advance(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.current
    }
}

/// Payload of an accepted submission plus the generation it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket<T> {
    generation: u64,
    payload: T,
}

impl<T> Ticket<T> {
    pub(crate) fn new(generation: u64, payload: T) -> Self {
        Self {
            generation,
            payload,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn into_parts(self) -> (u64, T) {
        (self.generation, self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_advances() {
        let mut generations = RequestGeneration::new();
        assert_eq!(generations.current(), 0);

        let first = generations.advance();
        assert!(generations.is_current(first));

        let second = generations.advance();
        assert!(second > first);
        assert!(!generations.is_current(first));
        assert!(generations.is_current(second));
    }

    #[test]
    fn test_ticket_parts() {
        let ticket = Ticket::new(7, "payload");
        assert_eq!(ticket.generation(), 7);
        assert_eq!(*ticket.payload(), "payload");
        assert_eq!(ticket.into_parts(), (7, "payload"));
    }
}
