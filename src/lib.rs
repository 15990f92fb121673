//! Discogs Lookup - resolves a Discogs release into a normalized record.
//!
//! Given a release reference, fetches the release (and its master, for the
//! original year) and groups the tracklist into discs. Used by the
//! `discogs-lookup` binary; other front ends call [`lookup::LookupService`]
//! directly.

pub mod cli;
pub mod config;
pub mod error;
pub mod lookup;
#[cfg(test)]
pub mod test_utils;

pub use lookup::{LookupConfig, LookupError, LookupOptions, LookupResult, LookupService, lookup_release};
