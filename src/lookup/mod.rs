//! Release lookup - fetches a Discogs release and normalizes it.
//!
//! # Architecture
//!
//! - **Domain models** (`domain.rs`) - Our types, independent of the API
//! - **API DTOs** (`discogs/dto.rs`) - Exact API response shapes
//! - **Adapter** - Converts DTOs to domain models
//! - **Client** - HTTP client for the Discogs API
//! - **Sanitize / Token** - Input cleanup and credential resolution
//! - **Partition** - Groups a flat tracklist into discs
//! - **Service** - Orchestrates the whole lookup
//!
//! # Usage
//!
//! ```ignore
//! use discogs_lookup::lookup::{LookupConfig, LookupOptions, LookupService};
//!
//! let service = LookupService::new(LookupConfig {
//!     default_token: Some("your-token".to_string()),
//!     ..Default::default()
//! })?;
//!
//! let result = service.lookup(&LookupOptions::new("[r249504]").disc(1)).await?;
//! println!("{} - {} ({:?})", result.artist, result.title, result.master_year);
//! ```

pub mod discogs;
pub mod domain;
pub mod partition;
pub mod sanitize;
pub mod service;
pub mod token;
pub mod traits;

pub use discogs::{ClientConfig, DiscogsClient};
pub use domain::{Disc, DiscTrack, LookupError, LookupResult, RawTrack, RemoteMaster, RemoteRelease, TrackKind};
pub use partition::{DiscLayout, disc_number, partition};
pub use sanitize::{ReleaseId, sanitize_release_id};
pub use service::{LookupConfig, LookupOptions, LookupService, lookup_release};
pub use token::resolve_token;
pub use traits::DiscogsApi;
