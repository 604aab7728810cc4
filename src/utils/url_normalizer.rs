//! Syntactic URL validation and canonicalization.
//!
//! Original URLs are stored in canonical form so that the dedup lookup in the
//! allocation path treats trivially different spellings as the same URL.

use url::Url;

/// Longest original URL accepted, in bytes.
pub const MAX_URL_LENGTH: usize = 2048;

#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS URLs can be shortened")]
    UnsupportedScheme,

    #[error("URL must contain a host")]
    MissingHost,

    #[error("URL exceeds {MAX_URL_LENGTH} bytes")]
    TooLong,
}

/// Canonicalizes an original URL.
///
/// # Rules
///
/// 1. Only `http` and `https` schemes are accepted
/// 2. A host is required and is lowercased
/// 3. Default ports (80 for HTTP, 443 for HTTPS) are dropped
/// 4. The fragment is dropped
/// 5. Path and query are preserved; an empty path becomes `/`
///
/// # Errors
///
/// Returns an error for unparsable input, non-HTTP(S) schemes, missing hosts
/// or inputs longer than [`MAX_URL_LENGTH`].
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let input = input.trim();
    if input.len() > MAX_URL_LENGTH {
        return Err(UrlNormalizationError::TooLong);
    }

    let mut url =
        Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(UrlNormalizationError::UnsupportedScheme);
    }

    // The url crate lowercases domain hosts and strips default ports while
    // parsing special schemes.
    match url.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(UrlNormalizationError::MissingHost),
    }

    url.set_fragment(None);

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_gets_trailing_slash() {
        assert_eq!(
            normalize_url("https://example.com").unwrap(),
            "https://example.com/"
        );
    }

    #[test]
    fn test_uppercase_host_is_lowered() {
        assert_eq!(
            normalize_url("HTTPS://EXAMPLE.COM/Path").unwrap(),
            "https://example.com/Path"
        );
    }

    #[test]
    fn test_default_ports_dropped() {
        assert_eq!(
            normalize_url("http://example.com:80/a").unwrap(),
            "http://example.com/a"
        );
        assert_eq!(
            normalize_url("https://example.com:443/a").unwrap(),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_custom_port_kept() {
        assert_eq!(
            normalize_url("http://example.com:8080/a").unwrap(),
            "http://example.com:8080/a"
        );
    }

    #[test]
    fn test_fragment_dropped_query_kept() {
        assert_eq!(
            normalize_url("https://example.com/page?q=rust&lang=en#top").unwrap(),
            "https://example.com/page?q=rust&lang=en"
        );
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(
            normalize_url("  https://example.com/x  ").unwrap(),
            "https://example.com/x"
        );
    }

    #[test]
    fn test_rejects_unsupported_schemes() {
        for input in [
            "ftp://example.com/file",
            "javascript:alert(1)",
            "mailto:user@example.com",
            "file:///etc/passwd",
        ] {
            assert!(
                matches!(
                    normalize_url(input),
                    Err(UrlNormalizationError::UnsupportedScheme)
                ),
                "{input}"
            );
        }
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            normalize_url("not-a-url"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
        assert!(normalize_url("").is_err());
    }

    #[test]
    fn test_rejects_overlong_input() {
        let long = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(matches!(
            normalize_url(&long),
            Err(UrlNormalizationError::TooLong)
        ));
    }
}
