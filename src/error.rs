//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`
//! ([`LookupError`], [`ConfigError`]), while the binary uses `anyhow` for
//! convenient propagation.
//!
//! # Example
//!
//! ```ignore
//! use discogs_lookup::error::{Result, ResultExt};
//!
//! fn show(service: &LookupService, options: &LookupOptions) -> Result<()> {
//!     let result = rt.block_on(service.lookup(options))?; // LookupError auto-converts
//!     render(&result, &mut stdout).with_context("while printing the result")?;
//!     Ok(())
//! }
//! ```

use crate::config::ConfigError;
use crate::lookup::LookupError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error while writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Lookup failed
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The requested disc does not exist on the release
    #[error("Disc {disc} not found. Available discs: {available}")]
    DiscNotFound { disc: u32, available: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a disc-not-found error from the discs a release does have.
    pub fn disc_not_found(disc: u32, available: &[u32]) -> Self {
        let available = if available.is_empty() {
            "none".to_string()
        } else {
            available
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        Self::DiscNotFound { disc, available }
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, ConfigError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Config(e).context(ctx))
    }
}
