//! CLI command definitions and dispatch.
//!
//! The default action looks up a release. Subcommands manage the token:
//! - `lookup`: Release lookup and rendering
//! - `config`: Token and config file inspection

mod config;
mod lookup;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tokio::runtime::Runtime;

pub use config::{cmd_check_config, cmd_set_token};
pub use lookup::{cmd_lookup, render_json, render_text};

/// Look up a Discogs release, its original year and its tracklist by disc
#[derive(Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub lookup: LookupArgs,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Arguments of the default lookup action
#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// Discogs release ID (249504, r249504 and [r249504] all work)
    pub release_id: Option<String>,

    /// Discogs personal access token (overrides DISCOGS_TOKEN and the config file)
    #[arg(short, long)]
    pub token: Option<String>,

    /// Only show this disc
    #[arg(short, long)]
    pub disc: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How a lookup result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Show where the token comes from and which config file is used
    CheckConfig,
    /// Store a Discogs token in the config file
    SetToken {
        /// Personal access token from https://www.discogs.com/settings/developers
        token: String,
    },
}

/// Run the command selected on the command line.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = crate::config::load();

    match &cli.command {
        Some(Commands::CheckConfig) => cmd_check_config(&config),
        Some(Commands::SetToken { token }) => cmd_set_token(config, token),
        None => {
            let rt = Runtime::new()?;
            cmd_lookup(&rt, &cli.lookup, &config)
        }
    }
}
