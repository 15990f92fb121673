//! Trait definition for the catalog API.
//!
//! [`LookupService`](super::LookupService) talks to Discogs only through
//! [`DiscogsApi`], so tests can substitute a mock.

use async_trait::async_trait;

use super::domain::{LookupError, RemoteMaster, RemoteRelease};
use super::sanitize::ReleaseId;

/// Release and master lookups against the catalog.
#[async_trait]
pub trait DiscogsApi: Send + Sync {
    /// Fetch a release by its sanitized ID.
    async fn fetch_release(
        &self,
        release_id: &ReleaseId,
        token: &str,
    ) -> Result<RemoteRelease, LookupError>;

    /// Fetch a master release by ID.
    async fn fetch_master(&self, master_id: u64, token: &str)
    -> Result<RemoteMaster, LookupError>;
}

#[async_trait]
impl DiscogsApi for super::discogs::DiscogsClient {
    async fn fetch_release(
        &self,
        release_id: &ReleaseId,
        token: &str,
    ) -> Result<RemoteRelease, LookupError> {
        self.fetch_release(release_id, token).await
    }

    async fn fetch_master(
        &self,
        master_id: u64,
        token: &str,
    ) -> Result<RemoteMaster, LookupError> {
        self.fetch_master(master_id, token).await
    }
}
