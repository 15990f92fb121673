//! Release lookup command and result rendering.

use std::io::Write;

use tokio::runtime::Runtime;

use crate::config::{self, Config};
use crate::error::{Error, Result, ResultExt};
use crate::lookup::{LookupOptions, LookupResult, LookupService};

use super::{LookupArgs, OutputFormat};

/// Look up a release and print it
pub fn cmd_lookup(rt: &Runtime, args: &LookupArgs, config: &Config) -> anyhow::Result<()> {
    let Some(release_id) = args.release_id.as_deref() else {
        anyhow::bail!("A release ID is required. Run with --help for usage.");
    };

    if args.format == OutputFormat::Text {
        println!("🔍 Looking up Discogs release ID: {}...", release_id);
    }

    let service = LookupService::new(config.lookup_config(config::env_token()))?;
    let options = LookupOptions {
        release_id: release_id.to_string(),
        token: args.token.clone(),
        disc: args.disc,
    };
    let result = rt.block_on(service.lookup(&options))?;

    if let Some(disc) = args.disc
        && result.discs.is_empty()
    {
        return Err(Error::disc_not_found(disc, &result.available_discs).into());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => render_text(&result, args.disc.is_some(), &mut out)?,
        OutputFormat::Json => render_json(&result, &mut out)?,
    }
    Ok(())
}

/// Print a result as a human-readable report.
///
/// Disc headings are shown for multi-disc results and whenever a disc was
/// explicitly requested.
pub fn render_text(result: &LookupResult, disc_requested: bool, out: &mut impl Write) -> Result<()> {
    write_text(result, disc_requested, out).with_context("Failed to write lookup result")
}

fn write_text(result: &LookupResult, disc_requested: bool, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Release Information ---")?;
    writeln!(out, "Artist:       {}", result.artist)?;
    writeln!(out, "Title:        {}", result.title)?;
    writeln!(out, "Release Year: {}", year_label(result.release_year))?;
    writeln!(out, "Master Year:  {}", year_label(result.master_year))?;
    writeln!(out, "Discogs URL:  {}", result.discogs_url)?;
    writeln!(out, "---------------------------")?;
    writeln!(out)?;

    if result.track_count() == 0 {
        writeln!(out, "No tracklist available for this release.")?;
        return Ok(());
    }

    let show_headings = disc_requested || result.discs.len() > 1;
    writeln!(out, "--- Tracklist ---")?;
    for disc in &result.discs {
        if show_headings {
            writeln!(out, "Disc {}", disc.disc)?;
        }
        for track in &disc.tracks {
            writeln!(out, "{:<5} {}", track.position, track.title)?;
        }
    }
    writeln!(out, "-----------------")?;
    writeln!(out)?;
    Ok(())
}

/// Print a result as pretty JSON
pub fn render_json(result: &LookupResult, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out).with_context("Failed to write lookup result")?;
    Ok(())
}

fn year_label(year: Option<i32>) -> String {
    year.map_or_else(|| "Unknown".to_string(), |y| y.to_string())
}
