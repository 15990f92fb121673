//! Adapter layer: Convert Discogs DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.

use super::dto;
use crate::lookup::domain::{RawTrack, RemoteMaster, RemoteRelease, TrackKind};

/// Convert a release response into a [`RemoteRelease`]
pub fn to_release(response: dto::ReleaseResponse) -> RemoteRelease {
    RemoteRelease {
        id: response.id,
        title: response.title,
        artists: artist_names(response.artists),
        year: known_year(response.year),
        // Discogs occasionally sends 0 instead of omitting the field
        master_id: response.master_id.filter(|id| *id > 0),
        tracklist: response.tracklist.into_iter().map(to_track).collect(),
    }
}

/// Convert a master response into a [`RemoteMaster`]
pub fn to_master(response: dto::MasterResponse) -> RemoteMaster {
    RemoteMaster {
        id: response.id,
        title: response.title,
        artists: artist_names(response.artists),
        year: known_year(response.year),
    }
}

fn to_track(track: dto::Track) -> RawTrack {
    // Index entries (medleys) are listed with their own position and stay playable
    let kind = match track.kind.as_deref() {
        Some("heading") => TrackKind::Heading,
        _ => TrackKind::Track,
    };

    RawTrack {
        position: track.position,
        title: track.title,
        duration: track.duration.filter(|d| !d.is_empty()),
        kind,
    }
}

fn artist_names(artists: Vec<dto::Artist>) -> Vec<String> {
    artists.into_iter().map(|a| a.name).collect()
}

/// Discogs uses 0 for "unknown year"
fn known_year(year: Option<i32>) -> Option<i32> {
    year.filter(|y| *y > 0)
}
