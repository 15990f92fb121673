//! Discogs API Data Transfer Objects
//!
//! These types match what the Discogs API returns for the two endpoints we use.
//! DO NOT use these types outside the discogs module - convert to domain types.
//!
//! API Reference: https://www.discogs.com/developers
//!
//! The API is loose about optional data: `master_id` may be missing or
//! `null`, `year` is `0` when unknown, and `artists`/`tracklist` are absent
//! on some stub entries.

use serde::{Deserialize, Serialize};

/// `GET /releases/{id}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReleaseResponse {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub tracklist: Vec<Track>,
    #[serde(default)]
    pub master_id: Option<u64>,
    #[serde(default)]
    pub year: Option<i32>,
}

/// `GET /masters/{id}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MasterResponse {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub year: Option<i32>,
}

/// Artist credit on a release or master
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub name: String,
    pub id: Option<u64>,
}

/// Tracklist entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub duration: Option<String>,
    /// "track", "heading" or "index"
    #[serde(rename = "type_")]
    pub kind: Option<String>,
}

/// Error body returned with non-2xx responses
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub message: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================
