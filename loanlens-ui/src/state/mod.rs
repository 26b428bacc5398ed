//! State Management
//!
//! App-wide context: configuration, the API client, the admin
//! authenticator and toast messages.

pub mod global;

pub use global::{provide_app_context, AppContext};
