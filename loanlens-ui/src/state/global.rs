//! Global Application State
//!
//! Everything pages share, provided once at the root through Leptos context.

use leptos::*;
use std::rc::Rc;

use loanlens::auth::{self, Authenticator, StaticAuthenticator};
use loanlens::{AuthMode, Config};

use crate::api::{FetchTransport, UiClient};

/// How long a success toast stays up
pub const SUCCESS_TOAST_MS: u32 = 3000;
/// How long an error toast stays up
pub const ERROR_TOAST_MS: u32 = 5000;

/// Shared state provided to all components
#[derive(Clone)]
pub struct AppContext {
    /// Client for the prediction service
    pub client: Rc<UiClient>,
    /// Verifies admin credentials
    pub authenticator: Rc<dyn Authenticator>,
    /// The admin gate is switched off
    pub open_admin: bool,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Resolve `LOANLENS_*` keys baked in at build time
fn build_var(key: &str) -> Option<String> {
    let value = match key {
        "LOANLENS_API_URL" => option_env!("LOANLENS_API_URL"),
        "LOANLENS_TEMPLATE_FILENAME" => option_env!("LOANLENS_TEMPLATE_FILENAME"),
        "LOANLENS_AUTH_MODE" => option_env!("LOANLENS_AUTH_MODE"),
        "LOANLENS_ADMIN_USER" => option_env!("LOANLENS_ADMIN_USER"),
        "LOANLENS_ADMIN_PASSWORD" => option_env!("LOANLENS_ADMIN_PASSWORD"),
        "LOANLENS_AUTH_URL" => option_env!("LOANLENS_AUTH_URL"),
        "LOANLENS_LOG_LEVEL" => option_env!("LOANLENS_LOG_LEVEL"),
        "LOANLENS_LOG_FORMAT" => option_env!("LOANLENS_LOG_FORMAT"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Build-time configuration, falling back to defaults if it is invalid
pub fn load_config() -> Config {
    Config::from_vars(build_var).unwrap_or_else(|e| {
        tracing::error!("Invalid build configuration, using defaults: {}", e);
        Config::default()
    })
}

/// Provide the app context to the component tree
pub fn provide_app_context(config: Config) {
    let authenticator: Rc<dyn Authenticator> =
        match auth::from_config(&config.auth, FetchTransport) {
            Ok(authenticator) => Rc::from(authenticator),
            Err(e) => {
                tracing::error!("Admin gate misconfigured, denying all logins: {}", e);
                Rc::new(StaticAuthenticator::default())
            }
        };

    tracing::info!(api = %config.api.base_url, "LoanLens UI starting");

    let context = AppContext {
        client: Rc::new(UiClient::new(FetchTransport, config.api)),
        authenticator,
        open_admin: config.auth.mode == AuthMode::Disabled,
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(context);
}

impl AppContext {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(SUCCESS_TOAST_MS, move || {
            let _ = success_signal.try_set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(ERROR_TOAST_MS, move || {
            let _ = error_signal.try_set(None);
        })
        .forget();
    }
}
