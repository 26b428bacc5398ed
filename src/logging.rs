//! Tracing setup for native hosts.
//!
//! The browser front-end installs its own console subscriber but shares
//! [`directive`] so both honour the same `[logging] level`.

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Unknown log format '{0}' (expected 'pretty' or 'json')")]
    UnknownFormat(String),

    #[error("Failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Default filter directive for our crates at the configured level
pub fn directive(config: &LoggingConfig) -> String {
    let level = config.level.trim().to_ascii_lowercase();
    format!("loanlens={level},loanlens_ui={level}")
}

/// `RUST_LOG` when set, else [`directive`]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive(config)))
        .unwrap_or_else(|_| EnvFilter::new("loanlens=info"))
}

/// Install the global subscriber described by `config`
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = env_filter(config);

    let installed = match config.format.trim().to_ascii_lowercase().as_str() {
        "pretty" => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init(),
        "json" => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        other => return Err(LoggingError::UnknownFormat(other.to_string())),
    };

    installed.map_err(|e| LoggingError::Install(e.to_string()))
}
