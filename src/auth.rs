//! Admin Authentication
//!
//! The admin gate asks an [`Authenticator`] whether a username/password
//! pair may see the dashboard. Which implementation is used comes from
//! `[auth] mode` in the configuration; credentials are never compiled in.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::client::{HttpRequest, RequestError, Transport};
use crate::config::{AuthConfig, AuthMode};

/// Username/password pair entered at the gate
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Granted,
    Denied,
}

impl AuthOutcome {
    pub fn is_granted(&self) -> bool {
        matches!(self, AuthOutcome::Granted)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Authentication is not configured: missing {0}")]
    NotConfigured(&'static str),

    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Decides whether credentials unlock the admin dashboard
#[async_trait(?Send)]
pub trait Authenticator {
    async fn verify(&self, credentials: &Credentials) -> Result<AuthOutcome, AuthError>;
}

/// Compares against a single configured account.
///
/// With no account configured every attempt is denied.
#[derive(Clone, Default)]
pub struct StaticAuthenticator {
    account: Option<Credentials>,
}

impl StaticAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            account: Some(Credentials::new(username, password)),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        match (&config.username, &config.password) {
            (Some(username), Some(password)) if !username.is_empty() => {
                Self::new(username.clone(), password.clone())
            }
            _ => {
                tracing::warn!("No admin account configured; the admin gate will deny everyone");
                Self::default()
            }
        }
    }
}

#[async_trait(?Send)]
impl Authenticator for StaticAuthenticator {
    async fn verify(&self, credentials: &Credentials) -> Result<AuthOutcome, AuthError> {
        let Some(account) = &self.account else {
            return Ok(AuthOutcome::Denied);
        };

        let user_ok = constant_time_eq(account.username.as_bytes(), credentials.username.as_bytes());
        let pass_ok = constant_time_eq(account.password.as_bytes(), credentials.password.as_bytes());

        if user_ok & pass_ok {
            Ok(AuthOutcome::Granted)
        } else {
            Ok(AuthOutcome::Denied)
        }
    }
}

/// POSTs the credentials as JSON to a verification endpoint.
///
/// Any 2xx grants access, 401 and 403 deny it, and every other status is
/// reported as an error.
pub struct RemoteAuthenticator<T> {
    transport: T,
    verify_url: String,
}

impl<T: Transport> RemoteAuthenticator<T> {
    pub fn new(transport: T, verify_url: impl Into<String>) -> Self {
        Self {
            transport,
            verify_url: verify_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl<T: Transport> Authenticator for RemoteAuthenticator<T> {
    async fn verify(&self, credentials: &Credentials) -> Result<AuthOutcome, AuthError> {
        let request = HttpRequest::post_json(self.verify_url.clone(), credentials)
            .map_err(|e| RequestError::Invalid(e.to_string()))?;
        let response = self
            .transport
            .send(request)
            .await
            .map_err(RequestError::from)?;

        match response.status {
            s if (200..300).contains(&s) => Ok(AuthOutcome::Granted),
            401 | 403 => {
                tracing::info!(username = %credentials.username, "Admin login denied");
                Ok(AuthOutcome::Denied)
            }
            _ => Err(RequestError::from_response(&response).into()),
        }
    }
}

/// Lets everyone through
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAuthenticator;

#[async_trait(?Send)]
impl Authenticator for OpenAuthenticator {
    async fn verify(&self, _credentials: &Credentials) -> Result<AuthOutcome, AuthError> {
        Ok(AuthOutcome::Granted)
    }
}

/// Build the authenticator selected by `config.mode`
pub fn from_config<T>(config: &AuthConfig, transport: T) -> Result<Box<dyn Authenticator>, AuthError>
where
    T: Transport + 'static,
{
    match config.mode {
        AuthMode::Static => Ok(Box::new(StaticAuthenticator::from_config(config))),
        AuthMode::Remote => {
            let url = config
                .verify_url
                .as_deref()
                .filter(|u| !u.trim().is_empty())
                .ok_or(AuthError::NotConfigured("auth.verify_url"))?;
            Ok(Box::new(RemoteAuthenticator::new(transport, url)))
        }
        AuthMode::Disabled => {
            tracing::warn!("Admin gate disabled");
            Ok(Box::new(OpenAuthenticator))
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::FakeTransport;
    use crate::client::RequestBody;

    const VERIFY_URL: &str = "https://auth.example.test/verify";

    #[tokio::test]
    async fn test_static_grants_configured_account() {
        let auth = StaticAuthenticator::new("admin", "s3cret");
        let outcome = auth.verify(&Credentials::new("admin", "s3cret")).await.unwrap();
        assert_eq!(outcome, AuthOutcome::Granted);
    }

    #[tokio::test]
    async fn test_static_denies_wrong_password() {
        let auth = StaticAuthenticator::new("admin", "s3cret");
        for attempt in [
            Credentials::new("admin", "S3cret"),
            Credentials::new("admin", ""),
            Credentials::new("root", "s3cret"),
        ] {
            assert_eq!(auth.verify(&attempt).await.unwrap(), AuthOutcome::Denied);
        }
    }

    #[tokio::test]
    async fn test_static_without_account_denies_everyone() {
        let auth = StaticAuthenticator::from_config(&AuthConfig::default());
        let outcome = auth.verify(&Credentials::new("", "")).await.unwrap();
        assert_eq!(outcome, AuthOutcome::Denied);
    }

    #[tokio::test]
    async fn test_remote_outcomes() {
        let transport = FakeTransport::new();
        transport.respond_text("/verify", 204, "");
        transport.respond_text("/verify", 401, "");
        transport.respond_text("/verify", 403, "");
        transport.respond_text("/verify", 502, "Bad Gateway");
        let auth = RemoteAuthenticator::new(transport, VERIFY_URL);
        let creds = Credentials::new("admin", "pw");

        assert_eq!(auth.verify(&creds).await.unwrap(), AuthOutcome::Granted);
        assert_eq!(auth.verify(&creds).await.unwrap(), AuthOutcome::Denied);
        assert_eq!(auth.verify(&creds).await.unwrap(), AuthOutcome::Denied);

        let err = auth.verify(&creds).await.unwrap_err();
        assert_eq!(err.to_string(), "Bad Gateway");
    }

    #[tokio::test]
    async fn test_remote_sends_credentials_as_json() {
        let transport = FakeTransport::new();
        transport.respond_text("/verify", 200, "");
        let auth = RemoteAuthenticator::new(transport, VERIFY_URL);
        auth.verify(&Credentials::new("admin", "pw")).await.unwrap();

        let requests = auth.transport.requests();
        assert_eq!(requests[0].url, VERIFY_URL);
        match &requests[0].body {
            RequestBody::Json(bytes) => {
                let body: serde_json::Value = serde_json::from_slice(bytes).unwrap();
                assert_eq!(body["username"], "admin");
                assert_eq!(body["password"], "pw");
            }
            other => panic!("expected JSON body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_remote_network_failure() {
        let transport = FakeTransport::new();
        transport.fail("/verify", "timed out");
        let auth = RemoteAuthenticator::new(transport, VERIFY_URL);

        let err = auth.verify(&Credentials::new("a", "b")).await.unwrap_err();
        assert_eq!(
            err,
            AuthError::Request(RequestError::Network("timed out".to_string()))
        );
    }

    #[tokio::test]
    async fn test_from_config_modes() {
        let mut config = AuthConfig {
            mode: AuthMode::Disabled,
            ..AuthConfig::default()
        };
        let auth = from_config(&config, FakeTransport::new()).unwrap();
        assert!(auth.verify(&Credentials::default()).await.unwrap().is_granted());

        config.mode = AuthMode::Remote;
        assert_eq!(
            from_config(&config, FakeTransport::new()).err(),
            Some(AuthError::NotConfigured("auth.verify_url"))
        );

        config.mode = AuthMode::Static;
        config.username = Some("ops".to_string());
        config.password = Some("pw".to_string());
        let auth = from_config(&config, FakeTransport::new()).unwrap();
        assert!(auth.verify(&Credentials::new("ops", "pw")).await.unwrap().is_granted());
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("admin", "hunter2");
        assert!(!format!("{:?}", creds).contains("hunter2"));
    }
}
