//! DTOs for the shortening endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /urls/shorten`.
///
/// The alias format (length, character set, reserved words) is checked by the
/// service so the same rules apply to every caller.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,

    /// Optional caller-chosen short code. An empty string means none.
    #[serde(default)]
    pub custom_alias: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_is_optional() {
        let req: ShortenRequest =
            serde_json::from_str(r#"{"original_url": "https://example.com"}"#).unwrap();
        assert!(req.custom_alias.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_invalid_url_fails_validation() {
        let req: ShortenRequest =
            serde_json::from_str(r#"{"original_url": "not a url"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_missing_url_fails_to_deserialize() {
        assert!(serde_json::from_str::<ShortenRequest>(r#"{"custom_alias": "abcd"}"#).is_err());
    }
}
