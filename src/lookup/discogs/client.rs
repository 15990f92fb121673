//! Discogs HTTP client
//!
//! Handles communication with the Discogs database API.
//! See: https://www.discogs.com/developers
//!
//! Discogs requires a descriptive User-Agent on every request. Personal
//! access tokens go in the `Authorization` header as `Discogs token=...`.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;

use super::{adapter, dto};
use crate::lookup::domain::{LookupError, RemoteMaster, RemoteRelease};
use crate::lookup::sanitize::ReleaseId;

/// Default Discogs API host
pub const DEFAULT_BASE_URL: &str = "https://api.discogs.com";

/// User agent string - Discogs rejects anonymous clients
pub const USER_AGENT: &str = concat!("discogs-lookup/", env!("CARGO_PKG_VERSION"));

/// HTTP settings for [`DiscogsClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Per-request timeout, none by default
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

/// Discogs API client
pub struct DiscogsClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl DiscogsClient {
    /// Create a new client
    ///
    /// The client is configured to:
    /// - Accept gzip-compressed responses
    /// - Send the configured User-Agent header
    pub fn new(config: &ClientConfig) -> Result<Self, LookupError> {
        let mut builder = reqwest::Client::builder()
            .gzip(true)
            .user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| LookupError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch a release by its sanitized ID
    pub async fn fetch_release(
        &self,
        release_id: &ReleaseId,
        token: &str,
    ) -> Result<RemoteRelease, LookupError> {
        let url = format!("{}/releases/{}", self.base_url, release_id);
        let response: dto::ReleaseResponse = self.get_json(&url, token).await?;
        Ok(adapter::to_release(response))
    }

    /// Fetch a master release by ID
    pub async fn fetch_master(
        &self,
        master_id: u64,
        token: &str,
    ) -> Result<RemoteMaster, LookupError> {
        let url = format!("{}/masters/{}", self.base_url, master_id);
        let response: dto::MasterResponse = self.get_json(&url, token).await?;
        Ok(adapter::to_master(response))
    }

    /// Send an authenticated GET and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str, token: &str) -> Result<T, LookupError> {
        let response = self
            .http_client
            .get(url)
            .header(AUTHORIZATION, authorization_value(token))
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        tracing::debug!(%url, status = status.as_u16(), "Discogs response");

        if !status.is_success() {
            // Body is best effort, the status alone is still worth reporting
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(url, status.as_u16(), &body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))
    }
}

/// `Authorization` header value for a personal access token
fn authorization_value(token: &str) -> String {
    format!("Discogs token={token}")
}

/// Build the error for a non-success response.
///
/// Uses the `message` field of a JSON error body when there is one,
/// otherwise the raw body text.
fn api_error(url: &str, status: u16, body: &str) -> LookupError {
    let message = serde_json::from_str::<dto::ApiError>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| body.to_string());

    LookupError::Api {
        url: url.to_string(),
        status,
        message,
    }
}
