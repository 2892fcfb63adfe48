// Hosted authentication backend client
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::config;

/// Errors for backend configuration and calls
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Missing required environment variable: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid backend base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Backend rejected the request with status {0}")]
    Rejected(u16),

    #[error("Backend response could not be read: {0}")]
    Malformed(String),

    #[error("Backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Account record as the hosted backend reports it
#[derive(Debug, Clone, Deserialize)]
pub struct BackendAccount {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// Role label as stored upstream; mapped to a dashboard role at login
    pub role: String,
}

/// Credential verification seam.
///
/// The live implementation talks to the hosted backend over HTTPS; tests can
/// stand in a canned implementation without any network.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<BackendAccount, BackendError>;

    async fn health(&self) -> Result<(), BackendError>;
}

/// HTTP client for the hosted backend
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl BackendClient {
    pub const URL_VAR: &'static str = "STOREBOARD_BACKEND_URL";
    pub const KEY_VAR: &'static str = "STOREBOARD_BACKEND_KEY";

    /// Build the client from environment variables; both are required
    pub fn from_env() -> Result<Self, BackendError> {
        let base_url = std::env::var(Self::URL_VAR)
            .map_err(|_| BackendError::ConfigMissing(Self::URL_VAR))?;
        let api_key = std::env::var(Self::KEY_VAR)
            .map_err(|_| BackendError::ConfigMissing(Self::KEY_VAR))?;
        Self::new(&base_url, api_key)
    }

    pub fn new(base_url: &str, api_key: String) -> Result<Self, BackendError> {
        let base_url = Self::parse_base_url(base_url)?;
        let timeout = config::config().backend.request_timeout_secs;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;
        Ok(Self { http, base_url, api_key })
    }

    /// Normalize to a trailing slash so `Url::join` keeps the base path
    fn parse_base_url(raw: &str) -> Result<Url, BackendError> {
        let mut normalized = raw.trim_end_matches('/').to_string();
        normalized.push('/');
        let url = Url::parse(&normalized)
            .map_err(|_| BackendError::InvalidBaseUrl(raw.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(BackendError::InvalidBaseUrl(raw.to_string()));
        }
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        self.base_url
            .join(path)
            .map_err(|_| BackendError::InvalidBaseUrl(path.to_string()))
    }
}

#[async_trait]
impl AuthBackend for BackendClient {
    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<BackendAccount, BackendError> {
        let url = self.endpoint("auth/login")?;
        let response = self
            .http
            .post(url)
            .header("x-api-key", &self.api_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<BackendAccount>()
                .await
                .map_err(|e| BackendError::Malformed(e.to_string()))
        } else {
            Err(BackendError::Rejected(status.as_u16()))
        }
    }

    async fn health(&self) -> Result<(), BackendError> {
        let url = self.endpoint("health")?;
        let response = self
            .http
            .get(url)
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(BackendError::Rejected(response.status().as_u16()))
        }
    }
}
