//! Discogs Lookup command-line entry point.

use std::process::ExitCode;

use clap::Parser;
use discogs_lookup::{cli, config};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();

    let args = cli::Cli::parse();

    // Logs go to stderr so stdout stays clean for text/JSON output
    let default_filter = if args.verbose {
        "discogs_lookup=debug"
    } else {
        "discogs_lookup=warn"
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    if let Some(problem) = config::dotenv_problem(&dotenv) {
        tracing::warn!("Ignoring .env file: {}", problem);
    }

    match cli::run_command(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
