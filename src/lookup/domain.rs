//! Internal domain models for release lookup.
//!
//! These types are OUR types - they don't change when the Discogs API changes.
//! Wire responses get converted into them by `discogs::adapter`.

use serde::Serialize;

/// Kind of a tracklist entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    /// A playable track
    Track,
    /// Section marker ("Side A", "Bonus Disc")
    Heading,
}

/// One entry of a release tracklist, exactly as listed by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTrack {
    /// Free-text position label ("A1", "2-03", "1", or empty)
    pub position: String,
    pub title: String,
    /// Duration as printed on the release ("3:55"), often empty
    pub duration: Option<String>,
    pub kind: TrackKind,
}

/// A specific pressing/edition fetched from the catalog
#[derive(Debug, Clone)]
pub struct RemoteRelease {
    pub id: u64,
    pub title: String,
    pub artists: Vec<String>,
    /// Release year, `None` when the catalog does not know it
    pub year: Option<i32>,
    /// Master record this release belongs to
    pub master_id: Option<u64>,
    pub tracklist: Vec<RawTrack>,
}

/// Canonical grouping of releases, carries the original year
#[derive(Debug, Clone)]
pub struct RemoteMaster {
    pub id: u64,
    pub title: String,
    pub artists: Vec<String>,
    pub year: Option<i32>,
}

/// A track as presented in a [`Disc`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscTrack {
    pub position: String,
    pub title: String,
}

/// Tracks grouped under one disc number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Disc {
    pub disc: u32,
    pub tracks: Vec<DiscTrack>,
}

/// Normalized result of a release lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    /// Comma-joined artist names, or "Unknown Artist"
    pub artist: String,
    pub title: String,
    /// Discs in ascending order, restricted to the requested disc if any
    pub discs: Vec<Disc>,
    /// Year of the master release, or the release year when there is no master
    pub master_year: Option<i32>,
    pub release_year: Option<i32>,
    pub discogs_url: String,
    /// Every disc number of the release, before any disc filter
    pub available_discs: Vec<u32>,
}

impl LookupResult {
    /// Total number of tracks across the returned discs
    pub fn track_count(&self) -> usize {
        self.discs.iter().map(|d| d.tracks.len()).sum()
    }

    /// Available disc numbers formatted for messages ("1, 2")
    pub fn available_discs_label(&self) -> String {
        self.available_discs
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Errors that can occur during a release lookup
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    #[error("Invalid Release ID format: \"{0}\". Please provide a valid numeric ID.")]
    InvalidId(String),

    #[error(
        "Discogs token is not configured. Please provide it as an argument or set the DISCOGS_TOKEN environment variable."
    )]
    MissingToken,

    #[error("Release with ID \"{0}\" not found.")]
    ReleaseNotFound(String),

    #[error("API request failed to {url}. Status: {status} - {message}")]
    Api {
        url: String,
        status: u16,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl LookupError {
    /// HTTP status of a failed API request, if the failure got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::ReleaseNotFound(_) => Some(404),
            _ => None,
        }
    }

    /// Whether the requested release does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ReleaseNotFound(_))
    }
}
