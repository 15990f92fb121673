//! Token and config file commands.

use crate::config::{self, Config};
use crate::error::ResultExt;

/// Report where the token would come from, never the token itself
pub fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("Checking configuration...\n");

    match config::config_path() {
        Some(path) if path.exists() => println!("✓ Config file: {}", path.display()),
        Some(path) => println!("- Config file: {} (not created yet)", path.display()),
        None => println!("✗ Config file: no config directory on this system"),
    }
    println!("  API host:    {}", config.http.base_url);
    if let Some(secs) = config.http.timeout_secs {
        println!("  Timeout:     {}s", secs);
    }

    println!();
    match config.default_token(config::env_token()) {
        Some((_, source)) => println!("✓ Discogs token: set (from {})", source),
        None => {
            println!("✗ Discogs token: not set");
            println!("  Get one at: https://www.discogs.com/settings/developers");
            println!(
                "  Then use: --token YOUR_TOKEN, set {} or run `discogs-lookup set-token YOUR_TOKEN`",
                config::TOKEN_ENV_VAR
            );
        }
    }

    Ok(())
}

/// Store a token in the config file
pub fn cmd_set_token(mut config: Config, token: &str) -> anyhow::Result<()> {
    let token = token.trim();
    if token.is_empty() {
        anyhow::bail!("The token must not be empty.");
    }

    config.credentials.discogs_token = Some(token.to_string());
    let path = config::save(&config).with_context("Failed to store Discogs token")?;

    println!("✓ Token saved to {}", path.display());
    if config::env_token().is_some_and(|t| !t.trim().is_empty()) {
        println!(
            "  Note: {} is set and takes precedence over the config file.",
            config::TOKEN_ENV_VAR
        );
    }
    Ok(())
}
