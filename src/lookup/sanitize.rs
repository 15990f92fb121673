//! Release identifier sanitization.
//!
//! Users paste release references in many shapes: `249504`, `r249504`,
//! `[r249504]` (the Discogs markup form) or a full URL fragment. Only the
//! digits matter.

use std::fmt;

use super::domain::LookupError;

/// Strip every non-digit character, keeping digit order.
///
/// Returns an empty string when the input has no digits; callers decide
/// whether that is an error.
pub fn sanitize_release_id(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// A digits-only, non-empty release identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseId(String);

impl ReleaseId {
    /// Sanitize user input into a release ID.
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        let digits = sanitize_release_id(raw);
        if digits.is_empty() {
            return Err(LookupError::InvalidId(raw.to_string()));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
