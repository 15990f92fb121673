//! Command-line interface for discogs-lookup.
//!
//! Looks up a release and prints it as text or JSON, and manages the
//! stored Discogs token.

mod commands;

pub use commands::{Cli, Commands, LookupArgs, OutputFormat, run_command};
