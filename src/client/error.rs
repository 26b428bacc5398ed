//! Request error type
//!
//! Every failed call to the service is normalized into a [`RequestError`]
//! whose `Display` text is what the user sees.

use serde_json::Value;
use thiserror::Error;

use super::transport::{HttpResponse, TransportError};

/// Fixed message for template download failures; the cause is not surfaced
pub const TEMPLATE_UNAVAILABLE: &str = "Unable to download the template";

/// Fixed message for responses that cannot be decoded
pub const UNEXPECTED_RESPONSE: &str = "Unexpected response from the service";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success status; `message` is taken from the response
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Success status, but the body was not the expected shape
    #[error("{}", UNEXPECTED_RESPONSE)]
    Decode(String),

    /// Rejected before sending
    #[error("{0}")]
    Invalid(String),

    #[error("{}", TEMPLATE_UNAVAILABLE)]
    TemplateUnavailable,
}

impl RequestError {
    /// Text shown inline in the originating form
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Build the error for a non-success response.
    ///
    /// The message is the body text (reduced to its `detail` when the service
    /// sent a structured error), else the status phrase, else `HTTP <code>`.
    pub fn from_response(response: &HttpResponse) -> Self {
        let message = extract_message(&response.text())
            .or_else(|| {
                let text = response.status_text.trim();
                (!text.is_empty()).then(|| text.to_string())
            })
            .unwrap_or_else(|| format!("HTTP {}", response.status));

        RequestError::Status {
            status: response.status,
            message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<TransportError> for RequestError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(msg) => RequestError::Network(msg),
            TransportError::InvalidRequest(msg) => RequestError::Invalid(msg),
        }
    }
}

/// Pull a readable message out of an error body.
///
/// Handles a bare JSON string, `{"detail": "..."}`,
/// `{"detail": {"message": "..."}}`, validation lists
/// (`{"detail": [{"msg": "..."}]}`) and `{"message": "..."}`; anything else
/// is returned verbatim.
fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => value,
        Err(_) => return Some(trimmed.to_string()),
    };

    let structured = match &parsed {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => match map.get("detail") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Object(detail)) => detail
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            Some(Value::Array(items)) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                (!msgs.is_empty()).then(|| msgs.join("; "))
            }
            _ => map
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
        },
        _ => None,
    };

    structured
        .filter(|s| !s.trim().is_empty())
        .or_else(|| Some(trimmed.to_string()))
}
