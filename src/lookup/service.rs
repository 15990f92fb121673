//! Lookup service - orchestrates a release lookup
//!
//! This is the high-level API:
//! 1. Sanitize the release identifier
//! 2. Resolve the access token
//! 3. Fetch the release
//! 4. Fetch its master (if any) for the original year
//! 5. Group the tracklist into discs

use super::discogs::{ClientConfig, DiscogsClient};
use super::domain::{LookupError, LookupResult};
use super::partition::partition;
use super::sanitize::ReleaseId;
use super::token::resolve_token;
use super::traits::DiscogsApi;

/// Public page of a release
const RELEASE_URL_BASE: &str = "https://www.discogs.com/release";

/// Artist shown when a release credits nobody
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Configuration for the lookup service
#[derive(Debug, Clone, Default)]
pub struct LookupConfig {
    /// Token used when a lookup does not bring its own
    pub default_token: Option<String>,
    /// HTTP client settings
    pub client: ClientConfig,
}

/// Arguments for a single lookup
#[derive(Debug, Clone, Default)]
pub struct LookupOptions {
    /// Release reference as typed by the user ("249504", "[r249504]")
    pub release_id: String,
    /// Token for this call, overrides the configured default
    pub token: Option<String>,
    /// Only return this disc
    pub disc: Option<u32>,
}

impl LookupOptions {
    pub fn new(release_id: impl Into<String>) -> Self {
        Self {
            release_id: release_id.into(),
            ..Default::default()
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn disc(mut self, disc: u32) -> Self {
        self.disc = Some(disc);
        self
    }
}

/// Service for looking up releases
///
/// Holds no mutable state; one service can run any number of concurrent
/// lookups.
pub struct LookupService<A = DiscogsClient> {
    api: A,
    default_token: Option<String>,
}

impl LookupService<DiscogsClient> {
    /// Create a service backed by the real Discogs API
    pub fn new(config: LookupConfig) -> Result<Self, LookupError> {
        let api = DiscogsClient::new(&config.client)?;
        Ok(Self::with_api(api, config.default_token))
    }
}

impl<A: DiscogsApi> LookupService<A> {
    /// Create a service on top of any [`DiscogsApi`] implementation
    pub fn with_api(api: A, default_token: Option<String>) -> Self {
        Self { api, default_token }
    }

    /// Look up a release and normalize it into a [`LookupResult`]
    ///
    /// Fails on the first step that fails; nothing is retried.
    pub async fn lookup(&self, options: &LookupOptions) -> Result<LookupResult, LookupError> {
        let release_id = ReleaseId::parse(&options.release_id)?;
        let token = resolve_token(options.token.as_deref(), self.default_token.as_deref())?;

        tracing::debug!(release_id = %release_id, "Fetching release");
        let release = self
            .api
            .fetch_release(&release_id, &token)
            .await
            .map_err(|e| match e {
                LookupError::Api { status: 404, .. } => {
                    LookupError::ReleaseNotFound(release_id.to_string())
                }
                other => other,
            })?;

        let master_year = match release.master_id {
            Some(master_id) => {
                tracing::debug!(master_id, "Fetching master release");
                let master = self.api.fetch_master(master_id, &token).await?;
                tracing::info!(
                    release_id = %release_id,
                    master_id,
                    year = ?master.year,
                    "Resolved original year from master"
                );
                master.year
            }
            // No master: this is the original release
            None => release.year,
        };

        let layout = partition(&release.tracklist);
        let available_discs = layout.disc_numbers();
        let discs = layout.select(options.disc);

        Ok(LookupResult {
            artist: join_artists(&release.artists),
            title: release.title,
            discs,
            master_year,
            release_year: release.year,
            discogs_url: release_url(&release_id),
            available_discs,
        })
    }
}

/// Quick helper to look up a release without keeping a service around
pub async fn lookup_release(
    options: &LookupOptions,
    config: LookupConfig,
) -> Result<LookupResult, LookupError> {
    LookupService::new(config)?.lookup(options).await
}

/// Canonical web URL of a release
pub fn release_url(release_id: &ReleaseId) -> String {
    format!("{RELEASE_URL_BASE}/{release_id}")
}

/// Comma-join artist names, first occurrence wins
fn join_artists(artists: &[String]) -> String {
    let mut seen: Vec<&str> = Vec::with_capacity(artists.len());
    for name in artists.iter().map(|a| a.trim()).filter(|a| !a.is_empty()) {
        if !seen.contains(&name) {
            seen.push(name);
        }
    }

    if seen.is_empty() {
        UNKNOWN_ARTIST.to_string()
    } else {
        seen.join(", ")
    }
}
