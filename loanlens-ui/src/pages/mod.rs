//! Pages
//!
//! Top-level page components for each route.

pub mod admin;
pub mod bank;
pub mod home;
pub mod user;

pub use admin::Admin;
pub use bank::Bank;
pub use home::Home;
pub use user::User;
