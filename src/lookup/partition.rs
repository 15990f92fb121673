//! Groups a flat Discogs tracklist into discs.
//!
//! Discogs position labels are free text and inconsistent across entries:
//! multi-disc releases mostly use `disc-track` compounds (`2-03`, `1.01`,
//! `1/4`), vinyl uses sides (`A1`, `B`), and plenty of single-disc releases
//! just number their tracks `1`, `2`, `3`. A bare number is read as a disc
//! number, and the collapse rule below undoes that for the common
//! single-disc case.
//!
//! Known limitation: a real multi-disc release where every disc holds
//! exactly one track labelled with a bare number is indistinguishable from
//! a numbered single-disc release and collapses into disc 1.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::domain::{Disc, DiscTrack, RawTrack, TrackKind};

/// Disc number used when the position label carries none
pub const DEFAULT_DISC: u32 = 1;

static DISC_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)[-./:]").expect("valid disc prefix pattern"));
static BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)$").expect("valid bare number pattern"));
static DISC_OF_TOTAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)/\d+").expect("valid disc/total pattern"));

/// Discs of a release, before any disc filter is applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscLayout {
    discs: Vec<Disc>,
}

impl DiscLayout {
    /// Every disc number, ascending
    pub fn disc_numbers(&self) -> Vec<u32> {
        self.discs.iter().map(|d| d.disc).collect()
    }

    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    /// Restrict to one disc; empty when the release has no such disc.
    pub fn select(self, disc: Option<u32>) -> Vec<Disc> {
        match disc {
            Some(wanted) => self.discs.into_iter().filter(|d| d.disc == wanted).collect(),
            None => self.discs,
        }
    }
}

/// Derive the disc number encoded in a position label.
///
/// First match wins: `N-`, `N.`, `N/`, `N:` prefixes, then a bare number,
/// then `N/M`. Anything else (sides like `A1`, empty labels) is disc 1.
/// Zero or out-of-range numbers also fall back to disc 1. Patterns are
/// anchored on the label as given, so leading whitespace means disc 1.
pub fn disc_number(position: &str) -> u32 {
    [&*DISC_PREFIX, &*BARE_NUMBER, &*DISC_OF_TOTAL]
        .iter()
        .find_map(|re| re.captures(position))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_DISC)
}

/// Partition a raw tracklist into discs.
///
/// Headings are dropped. Each track keeps its original label; a missing
/// label becomes its 1-based index in the raw tracklist.
pub fn partition(tracklist: &[RawTrack]) -> DiscLayout {
    let playable: Vec<(usize, &RawTrack)> = tracklist
        .iter()
        .enumerate()
        .filter(|(_, t)| t.kind == TrackKind::Track)
        .collect();

    if playable.is_empty() {
        return DiscLayout::default();
    }

    let mut buckets: BTreeMap<u32, Vec<DiscTrack>> = BTreeMap::new();
    for (index, track) in &playable {
        buckets
            .entry(disc_number(&track.position))
            .or_default()
            .push(display_track(*index, track));
    }

    // Every track landed on its own disc: almost certainly a single-disc
    // release numbered 1..n, not n one-track discs.
    let collapse = buckets.len() == playable.len() && buckets.values().all(|b| b.len() == 1);
    if collapse && buckets.len() > 1 {
        tracing::debug!(
            tracks = playable.len(),
            "Collapsing one-track discs into a single disc"
        );
    }

    let discs = if collapse {
        vec![Disc {
            disc: DEFAULT_DISC,
            tracks: playable
                .iter()
                .map(|(index, track)| display_track(*index, track))
                .collect(),
        }]
    } else {
        buckets
            .into_iter()
            .map(|(disc, tracks)| Disc { disc, tracks })
            .collect()
    };

    DiscLayout { discs }
}

fn display_track(index: usize, track: &RawTrack) -> DiscTrack {
    let position = if track.position.trim().is_empty() {
        (index + 1).to_string()
    } else {
        track.position.clone()
    };
    DiscTrack {
        position,
        title: track.title.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{heading, track};
    use proptest::prelude::*;

    fn titles(disc: &Disc) -> Vec<&str> {
        disc.tracks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_disc_number_patterns() {
        assert_eq!(disc_number("1-1"), 1);
        assert_eq!(disc_number("2-03"), 2);
        assert_eq!(disc_number("1.01"), 1);
        assert_eq!(disc_number("3/12"), 3);
        assert_eq!(disc_number("2:7"), 2);
        assert_eq!(disc_number("1"), 1);
        assert_eq!(disc_number("12"), 12);
    }

    #[test]
    fn test_disc_number_defaults() {
        assert_eq!(disc_number("A"), 1);
        assert_eq!(disc_number("B2"), 1);
        assert_eq!(disc_number(""), 1);
        assert_eq!(disc_number("CD2-1"), 1);
        assert_eq!(disc_number("0-1"), 1);
        assert_eq!(disc_number("99999999999-1"), 1);
    }

    #[test]
    fn test_disc_number_uses_raw_label() {
        assert_eq!(disc_number(" 2-03"), 1);
        assert_eq!(disc_number("2-03 "), 2);
        assert_eq!(disc_number("3 "), 1);
    }

    #[test]
    fn test_bare_numbers_collapse_to_single_disc() {
        let tracks = vec![track("1", "One More Time"), track("2", "Unplugged")];

        let layout = partition(&tracks);

        assert_eq!(layout.disc_numbers(), vec![1]);
        let disc = &layout.discs()[0];
        assert_eq!(titles(disc), vec!["One More Time", "Unplugged"]);
        assert_eq!(disc.tracks[1].position, "2");
    }

    #[test]
    fn test_sides_group_into_disc_one() {
        let tracks = vec![track("A", "Alpha"), track("B", "Beta")];

        let layout = partition(&tracks);

        assert_eq!(layout.discs().len(), 1);
        assert_eq!(layout.discs()[0].disc, 1);
        assert_eq!(titles(&layout.discs()[0]), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_compound_positions_make_sorted_discs() {
        let tracks = vec![
            track("2-01", "Second A"),
            track("1-01", "First A"),
            track("2-02", "Second B"),
            track("1-02", "First B"),
        ];

        let layout = partition(&tracks);

        assert_eq!(layout.disc_numbers(), vec![1, 2]);
        assert_eq!(titles(&layout.discs()[0]), vec!["First A", "First B"]);
        assert_eq!(titles(&layout.discs()[1]), vec!["Second A", "Second B"]);
    }

    #[test]
    fn test_headings_are_dropped() {
        let tracks = vec![
            heading("CD 1"),
            track("1-1", "Opener"),
            track("1-2", "Closer"),
            heading("CD 2"),
            track("2-1", "Encore"),
        ];

        let layout = partition(&tracks);

        assert_eq!(layout.disc_numbers(), vec![1, 2]);
        assert_eq!(layout.discs()[0].tracks.len(), 2);
        assert_eq!(titles(&layout.discs()[1]), vec!["Encore"]);
    }

    #[test]
    fn test_missing_position_uses_source_index() {
        let tracks = vec![heading("Side A"), track("A1", "First"), track("", "Hidden")];

        let layout = partition(&tracks);

        let disc = &layout.discs()[0];
        assert_eq!(disc.tracks[0].position, "A1");
        assert_eq!(disc.tracks[1].position, "3");
    }

    #[test]
    fn test_single_numbered_track() {
        let layout = partition(&[track("5", "Lonely")]);

        assert_eq!(layout.disc_numbers(), vec![1]);
        assert_eq!(layout.discs()[0].tracks[0].position, "5");
    }

    #[test]
    fn test_empty_tracklist() {
        assert!(partition(&[]).is_empty());
        assert!(partition(&[heading("Nothing here")]).is_empty());
    }

    #[test]
    fn test_mixed_layout_does_not_collapse() {
        let tracks = vec![track("1", "Disc one"), track("2-1", "Two A"), track("2-2", "Two B")];

        let layout = partition(&tracks);

        assert_eq!(layout.disc_numbers(), vec![1, 2]);
    }

    #[test]
    fn test_select_disc() {
        let tracks = vec![track("1-1", "One"), track("2-1", "Two A"), track("2-2", "Two B")];

        let layout = partition(&tracks);
        assert_eq!(layout.disc_numbers(), vec![1, 2]);

        let selected = layout.clone().select(Some(2));
        assert_eq!(selected.len(), 1);
        assert_eq!(titles(&selected[0]), vec!["Two A", "Two B"]);

        assert!(layout.clone().select(Some(3)).is_empty());
        assert_eq!(layout.select(None).len(), 2);
    }

    fn position() -> impl Strategy<Value = String> {
        prop_oneof![
            "[1-4]-[0-9]{1,2}",
            "[1-4]\\.[0-9]{2}",
            "[A-D][1-6]?",
            "[1-9]",
            Just(String::new()),
        ]
    }

    proptest! {
        /// No track is lost or duplicated and source order survives within a disc
        #[test]
        fn partition_keeps_every_track(positions in prop::collection::vec(position(), 0..20)) {
            let tracks: Vec<RawTrack> = positions
                .iter()
                .enumerate()
                .map(|(i, p)| track(p, &format!("t{i}")))
                .collect();

            let layout = partition(&tracks);
            let total: usize = layout.discs().iter().map(|d| d.tracks.len()).sum();
            prop_assert_eq!(total, tracks.len());

            for disc in layout.discs() {
                let order: Vec<usize> = disc
                    .tracks
                    .iter()
                    .map(|t| t.title[1..].parse().unwrap())
                    .collect();
                prop_assert!(order.windows(2).all(|w| w[0] < w[1]));
            }
        }

        /// Disc numbers are positive, unique and ascending
        #[test]
        fn partition_discs_sorted(positions in prop::collection::vec(position(), 0..20)) {
            let tracks: Vec<RawTrack> = positions.iter().map(|p| track(p, "x")).collect();

            let numbers = partition(&tracks).disc_numbers();
            prop_assert!(numbers.iter().all(|n| *n > 0));
            prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
