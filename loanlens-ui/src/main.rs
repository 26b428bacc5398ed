//! LoanLens UI
//!
//! Loan-approval estimation front-end built with Leptos (WASM).
//!
//! # Pages
//!
//! - Home: entry points for applicants, banks and admins
//! - User: single estimate with a probability gauge, plus an optional survey
//! - Bank: single estimate, spreadsheet batch upload and per-record review
//! - Admin: login gate in front of the statistics dashboard
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All request and workflow logic lives in the `loanlens` core
//! crate; this crate wires it to signals, the DOM and `fetch`.

use leptos::*;

mod api;
mod app;
mod components;
mod download;
mod logging;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = state::global::load_config();
    logging::init(&config.logging);

    mount_to_body(move || view! { <app::App config=config /> });
}
