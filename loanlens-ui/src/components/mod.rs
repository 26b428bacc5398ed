//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod admin_login;
pub mod batch_viewer;
pub mod chart;
pub mod feedback_form;
pub mod gauge;
pub mod loading;
pub mod nav;
pub mod prediction_card;
pub mod profile_form;
pub mod stat_card;
pub mod toast;

pub use admin_login::AdminLogin;
pub use batch_viewer::BatchViewer;
pub use chart::{BarChart, PieChart};
pub use feedback_form::FeedbackSurvey;
pub use gauge::Gauge;
pub use loading::{CardSkeleton, InlineLoading, Loading};
pub use nav::Nav;
pub use prediction_card::PredictionCard;
pub use profile_form::ProfileForm;
pub use stat_card::StatCard;
pub use toast::Toast;
