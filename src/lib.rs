//! # LoanLens
//!
//! Front-end core for a loan-approval estimation service. All modelling
//! happens behind an HTTP API; this crate owns everything on the client
//! side of that boundary.
//!
//! ## Modules
//!
//! - [`model`]: applicant profiles, predictions, survey answers and statistics
//! - [`client`]: typed API client over a pluggable [`Transport`]
//! - [`workflow`]: per-page state machines (single, batch, feedback, login, dashboard)
//! - [`auth`]: admin gate authenticators
//! - [`download`]: template download with guaranteed object-URL cleanup
//! - [`config`]: TOML and environment configuration
//! - [`logging`]: tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # #[cfg(feature = "reqwest-transport")]
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use loanlens::{ApiClient, ClientProfile, Config, ReqwestTransport};
//!
//! let config = Config::load_default()?;
//! let client = ApiClient::new(ReqwestTransport::new(), config.api);
//!
//! let result = client.predict_one(&ClientProfile::default()).await?;
//! println!("approved: {} ({})", result.is_approved(), result.probability_label());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod download;
pub mod logging;
pub mod model;
pub mod workflow;

pub use auth::{AuthError, AuthOutcome, Authenticator, Credentials};

pub use client::{ApiClient, RequestError, Transport, TransportError};

#[cfg(feature = "reqwest-transport")]
pub use client::ReqwestTransport;

pub use config::{ApiConfig, AuthConfig, AuthMode, Config, ConfigError, LoggingConfig};

pub use download::{download_template, DownloadError, ObjectUrls};

pub use model::{
    AggregateStats, BatchRecord, ClientProfile, Decision, FeedbackEntry, FeedbackStats,
    PredictionResult, TemplateFile, UploadFile,
};

pub use workflow::{
    BatchPhase, BatchPredictor, BatchSummary, Dashboard, FeedbackForm, LoginForm,
    RecordViewer, SinglePredictor, SourceStatus,
};
