//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\discogs-lookup\config.toml
//! - macOS: ~/Library/Application Support/discogs-lookup/config.toml
//! - Linux: ~/.config/discogs-lookup/config.toml
//!
//! The default Discogs token comes from the `DISCOGS_TOKEN` environment
//! variable (a `.env` file is loaded at startup) or, failing that, from
//! `credentials.discogs_token` in the config file. It is resolved once at
//! startup and handed to the lookup service through [`LookupConfig`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::lookup::{ClientConfig, LookupConfig};
use crate::lookup::discogs::{DEFAULT_BASE_URL, USER_AGENT};

/// Environment variable holding the default token
pub const TOKEN_ENV_VAR: &str = "DISCOGS_TOKEN";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials
    pub credentials: Credentials,

    /// HTTP client settings
    pub http: HttpConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Discogs personal access token
    pub discogs_token: Option<String>,
}

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Discogs API host
    pub base_url: String,

    /// Request timeout in seconds (unset = no timeout)
    pub timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Where the default token was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Environment,
    ConfigFile,
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Environment => write!(f, "{} environment variable", TOKEN_ENV_VAR),
            Self::ConfigFile => write!(f, "config file"),
        }
    }
}

impl Config {
    /// Pick the default token: environment first, then the config file.
    ///
    /// Blank values are ignored.
    pub fn default_token(&self, env_token: Option<String>) -> Option<(String, TokenSource)> {
        let non_blank = |t: &String| !t.trim().is_empty();

        env_token
            .filter(non_blank)
            .map(|t| (t, TokenSource::Environment))
            .or_else(|| {
                self.credentials
                    .discogs_token
                    .clone()
                    .filter(non_blank)
                    .map(|t| (t, TokenSource::ConfigFile))
            })
    }

    /// Build the lookup service configuration.
    pub fn lookup_config(&self, env_token: Option<String>) -> LookupConfig {
        LookupConfig {
            default_token: self.default_token(env_token).map(|(token, _)| token),
            client: ClientConfig {
                base_url: self.http.base_url.clone(),
                user_agent: USER_AGENT.to_string(),
                timeout: self.http.timeout_secs.map(Duration::from_secs),
            },
        }
    }
}

/// Read the token environment variable
pub fn env_token() -> Option<String> {
    std::env::var(TOKEN_ENV_VAR).ok()
}

/// Describe a failed `.env` load worth warning about.
///
/// A missing file is the normal case and yields `None`.
pub fn dotenv_problem<T>(result: &dotenvy::Result<T>) -> Option<String> {
    match result {
        Err(e) if !e.not_found() => Some(e.to_string()),
        _ => None,
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("discogs-lookup"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from a specific file
///
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config file {:?}: {}", path, e);
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to the default location
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)?;
    Ok(path)
}

/// Save configuration to a specific file
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
