//! Access token resolution.

use super::domain::LookupError;

/// Pick the token for a lookup.
///
/// An explicit, non-blank token always wins. Otherwise the configured
/// default is used. Blank strings count as absent.
pub fn resolve_token(explicit: Option<&str>, configured: Option<&str>) -> Result<String, LookupError> {
    explicit
        .filter(|t| !t.trim().is_empty())
        .or(configured.filter(|t| !t.trim().is_empty()))
        .map(str::to_string)
        .ok_or(LookupError::MissingToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_wins_over_configured() {
        let token = resolve_token(Some("arg-token"), Some("env-token")).unwrap();
        assert_eq!(token, "arg-token");
    }

    #[test]
    fn test_explicit_without_configured() {
        let token = resolve_token(Some("arg-token"), None).unwrap();
        assert_eq!(token, "arg-token");
    }

    #[test]
    fn test_falls_back_to_configured() {
        let token = resolve_token(None, Some("env-token-123")).unwrap();
        assert_eq!(token, "env-token-123");
    }

    #[test]
    fn test_blank_explicit_falls_back() {
        let token = resolve_token(Some(""), Some("env-token")).unwrap();
        assert_eq!(token, "env-token");
    }

    #[test]
    fn test_missing_everywhere() {
        let err = resolve_token(None, None).unwrap_err();
        assert!(matches!(err, LookupError::MissingToken));

        let err = resolve_token(Some("  "), Some("")).unwrap_err();
        assert!(err.to_string().contains("Discogs token is not configured."));
    }
}
