//! Admin login gate.

use crate::auth::{AuthError, AuthOutcome, Credentials};

use super::{RequestGeneration, Ticket};

/// Shown when the authenticator rejects the credentials
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Login form in front of the dashboard.
///
/// Once granted, access lasts for the lifetime of this value; nothing is
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    granted: bool,
    error: Option<String>,
    in_flight: Option<u64>,
    generations: RequestGeneration,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the form, e.g. when the gate is disabled
    pub fn pre_granted() -> Self {
        Self {
            granted: true,
            ..Self::default()
        }
    }

    pub fn is_granted(&self) -> bool {
        self.granted
    }

    pub fn is_checking(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_submit(&mut self) -> Option<Ticket<Credentials>> {
        if self.granted || self.is_checking() {
            return None;
        }

        self.error = None;
        let generation = self.generations.advance();
        self.in_flight = Some(generation);
        Some(Ticket::new(
            generation,
            Credentials::new(self.username.clone(), self.password.clone()),
        ))
    }

    /// Apply the verdict for attempt `generation`; returns whether access was granted
    pub fn complete(&mut self, generation: u64, outcome: Result<AuthOutcome, AuthError>) -> bool {
        if self.in_flight != Some(generation) || !self.generations.is_current(generation) {
            return false;
        }
        self.in_flight = None;

        match outcome {
            Ok(AuthOutcome::Granted) => {
                tracing::info!(username = %self.username, "Admin login granted");
                self.granted = true;
                self.password.clear();
            }
            Ok(AuthOutcome::Denied) => {
                self.error = Some(INVALID_CREDENTIALS.to_string());
                self.password.clear();
            }
            Err(err) => {
                tracing::warn!("Admin login check failed: {}", err);
                self.error = Some(err.to_string());
            }
        }
        self.granted
    }
}
