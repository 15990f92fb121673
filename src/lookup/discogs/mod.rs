//! Discogs API integration
//!
//! Fetches releases and their master records. The master carries the
//! original year of a work across all its pressings.
//!
//! API docs: https://www.discogs.com/developers

pub mod dto;
mod adapter;
mod client;

pub use adapter::{to_master, to_release};
pub use client::{ClientConfig, DEFAULT_BASE_URL, DiscogsClient, USER_AGENT};
