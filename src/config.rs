//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides. The browser
//! build has no process environment and resolves the same keys through
//! [`Config::from_vars`] instead.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Prediction service location and routes
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_template_filename")]
    pub template_filename: String,

    #[serde(default)]
    pub endpoints: EndpointsConfig,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_template_filename() -> String {
    "loan_template.csv".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            template_filename: default_template_filename(),
            endpoints: EndpointsConfig::default(),
        }
    }
}

/// Logical service operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    PredictOne,
    PredictBatch,
    Feedback,
    Template,
    Stats,
    FeedbackStats,
}

/// Path of each operation relative to the base URL
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_predict_one")]
    pub predict_one: String,

    #[serde(default = "default_predict_batch")]
    pub predict_batch: String,

    #[serde(default = "default_feedback")]
    pub feedback: String,

    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default = "default_stats")]
    pub stats: String,

    #[serde(default = "default_feedback_stats")]
    pub feedback_stats: String,
}

fn default_predict_one() -> String {
    "/predict-one".to_string()
}

fn default_predict_batch() -> String {
    "/predict-batch-file".to_string()
}

fn default_feedback() -> String {
    "/feedback".to_string()
}

fn default_template() -> String {
    "/csv-template".to_string()
}

fn default_stats() -> String {
    "/stats".to_string()
}

fn default_feedback_stats() -> String {
    "/feedback-stats".to_string()
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            predict_one: default_predict_one(),
            predict_batch: default_predict_batch(),
            feedback: default_feedback(),
            template: default_template(),
            stats: default_stats(),
            feedback_stats: default_feedback_stats(),
        }
    }
}

impl ApiConfig {
    /// Absolute URL of an operation
    pub fn url(&self, endpoint: Endpoint) -> String {
        let path = match endpoint {
            Endpoint::PredictOne => &self.endpoints.predict_one,
            Endpoint::PredictBatch => &self.endpoints.predict_batch,
            Endpoint::Feedback => &self.endpoints.feedback,
            Endpoint::Template => &self.endpoints.template,
            Endpoint::Stats => &self.endpoints.stats,
            Endpoint::FeedbackStats => &self.endpoints.feedback_stats,
        };
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// How the admin gate verifies credentials
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Compare against credentials from this configuration (development only)
    #[default]
    Static,
    /// Delegate to an external verification endpoint
    Remote,
    /// No gate at all
    Disabled,
}

impl std::str::FromStr for AuthMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(AuthMode::Static),
            "remote" => Ok(AuthMode::Remote),
            "disabled" => Ok(AuthMode::Disabled),
            other => Err(ConfigError::Invalid {
                key: "auth.mode",
                value: other.to_string(),
            }),
        }
    }
}

/// Admin authentication configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub mode: AuthMode,

    pub username: Option<String>,

    pub password: Option<String>,

    pub verify_url: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        let mut config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
        config.normalize();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` resolves for the `LOANLENS_*` keys
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("loanlens").join("config.toml")),
            Some(PathBuf::from("/etc/loanlens/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // API overrides
        if let Some(url) = lookup("LOANLENS_API_URL") {
            self.api.base_url = url;
        }
        if let Some(name) = lookup("LOANLENS_TEMPLATE_FILENAME") {
            self.api.template_filename = name;
        }

        // Auth overrides
        if let Some(mode) = lookup("LOANLENS_AUTH_MODE") {
            self.auth.mode = mode.parse()?;
        }
        if let Some(user) = lookup("LOANLENS_ADMIN_USER") {
            self.auth.username = Some(user);
        }
        if let Some(password) = lookup("LOANLENS_ADMIN_PASSWORD") {
            self.auth.password = Some(password);
        }
        if let Some(url) = lookup("LOANLENS_AUTH_URL") {
            self.auth.verify_url = Some(url);
        }

        // Logging overrides
        if let Some(level) = lookup("LOANLENS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("LOANLENS_LOG_FORMAT") {
            self.logging.format = format;
        }

        self.normalize();
        Ok(())
    }

    fn normalize(&mut self) {
        let trimmed = self.api.base_url.trim().trim_end_matches('/').to_string();
        self.api.base_url = trimmed;
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# LoanLens Configuration
#
# Environment variables override these settings:
# - LOANLENS_API_URL
# - LOANLENS_TEMPLATE_FILENAME
# - LOANLENS_AUTH_MODE
# - LOANLENS_ADMIN_USER
# - LOANLENS_ADMIN_PASSWORD
# - LOANLENS_AUTH_URL
# - LOANLENS_LOG_LEVEL
# - LOANLENS_LOG_FORMAT

[api]
# Base URL of the loan-approval service
base_url = "http://localhost:8000"

# File name offered when saving the batch template
template_filename = "loan_template.csv"

[api.endpoints]
predict_one = "/predict-one"
predict_batch = "/predict-batch-file"
feedback = "/feedback"
template = "/csv-template"
stats = "/stats"
feedback_stats = "/feedback-stats"

[auth]
# static: compare with username/password below (development only)
# remote: POST credentials to verify_url
# disabled: no admin gate
mode = "static"
# username = ""
# password = ""
# verify_url = "https://auth.example.com/verify"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.template_filename, "loan_template.csv");
        assert_eq!(config.auth.mode, AuthMode::Static);
        assert!(config.auth.username.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_endpoint_urls() {
        let config = ApiConfig::default();
        assert_eq!(
            config.url(Endpoint::PredictOne),
            "http://localhost:8000/predict-one"
        );
        assert_eq!(
            config.url(Endpoint::PredictBatch),
            "http://localhost:8000/predict-batch-file"
        );
        assert_eq!(
            config.url(Endpoint::FeedbackStats),
            "http://localhost:8000/feedback-stats"
        );
    }

    #[test]
    fn test_from_vars_overrides_and_normalizes() {
        let vars: HashMap<&str, &str> = [
            ("LOANLENS_API_URL", "https://loans.example.com/api/"),
            ("LOANLENS_AUTH_MODE", "Remote"),
            ("LOANLENS_AUTH_URL", "https://auth.example.com/verify"),
            ("LOANLENS_LOG_LEVEL", ""),
        ]
        .into_iter()
        .collect();

        let config = Config::from_vars(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.api.base_url, "https://loans.example.com/api");
        assert_eq!(
            config.api.url(Endpoint::Stats),
            "https://loans.example.com/api/stats"
        );
        assert_eq!(config.auth.mode, AuthMode::Remote);
        assert_eq!(
            config.auth.verify_url.as_deref(),
            Some("https://auth.example.com/verify")
        );
        // Blank values do not override
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_auth_mode() {
        let result = Config::from_vars(|k| {
            (k == "LOANLENS_AUTH_MODE").then(|| "ldap".to_string())
        });
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { key: "auth.mode", .. })
        ));
    }

    #[test]
    fn test_default_config_file_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.endpoints, EndpointsConfig::default());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[api]
base_url = "http://10.0.0.5:9000/"

[api.endpoints]
stats = "/admin/stats"

[auth]
mode = "disabled"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.api.url(Endpoint::Stats), "http://10.0.0.5:9000/admin/stats");
        assert_eq!(config.api.endpoints.predict_one, "/predict-one");
        assert_eq!(config.auth.mode, AuthMode::Disabled);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/loanlens.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
