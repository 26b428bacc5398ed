//! Browser HTTP plumbing
//!
//! The core client is transport-generic; this module supplies the
//! `fetch`-backed transport and the blob helpers shared with downloads.

pub mod client;

pub use client::{js_error, to_blob, FetchTransport, UiClient};
