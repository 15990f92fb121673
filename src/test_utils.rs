//! Test utilities and fixtures for discogs-lookup tests.
//!
//! Fixtures mirror the Daft Punk "One More Time" single (release 249504,
//! master 3369), a two-track release numbered `1`, `2`.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{mock_release, track};
//!
//! let release = RemoteRelease {
//!     tracklist: vec![track("A1", "Intro")],
//!     ..mock_release()
//! };
//! ```

use crate::lookup::domain::{RawTrack, RemoteMaster, RemoteRelease, TrackKind};

/// A playable track with the given position label.
pub fn track(position: &str, title: &str) -> RawTrack {
    RawTrack {
        position: position.to_string(),
        title: title.to_string(),
        duration: None,
        kind: TrackKind::Track,
    }
}

/// A non-playable section heading.
pub fn heading(title: &str) -> RawTrack {
    RawTrack {
        position: String::new(),
        title: title.to_string(),
        duration: None,
        kind: TrackKind::Heading,
    }
}

/// Release 249504, linked to master 3369.
pub fn mock_release() -> RemoteRelease {
    RemoteRelease {
        id: 249504,
        title: "One More Time".to_string(),
        artists: vec!["Daft Punk".to_string()],
        year: Some(2000),
        master_id: Some(3369),
        tracklist: vec![
            RawTrack {
                duration: Some("3:55".to_string()),
                ..track("1", "One More Time (Short Radio Edit)")
            },
            RawTrack {
                duration: Some("3:40".to_string()),
                ..track("2", "One More Time (Unplugged)")
            },
        ],
    }
}

/// Master 3369.
pub fn mock_master() -> RemoteMaster {
    RemoteMaster {
        id: 3369,
        title: "One More Time".to_string(),
        artists: vec!["Daft Punk".to_string()],
        year: Some(2000),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_release_links_mock_master() {
        assert_eq!(mock_release().master_id, Some(mock_master().id));
    }

    #[test]
    fn test_heading_is_not_playable() {
        let h = heading("Side A");
        assert_eq!(h.kind, TrackKind::Heading);
        assert!(h.position.is_empty());
    }
}
