//! Short code generation and custom alias validation.
//!
//! Generated codes are drawn uniformly from a 62-symbol alphabet so they are
//! neither guessable nor reveal creation order. Uniqueness is not a concern of
//! this module; see [`crate::application::services::UrlService`].

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Symbols a generated code may contain: `A-Z`, `a-z`, `0-9`.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 6;

pub const MIN_ALIAS_LENGTH: usize = 4;
pub const MAX_ALIAS_LENGTH: usize = 20;

/// Codes that would be shadowed by fixed routes.
pub const RESERVED_CODES: &[&str] = &["urls", "analytics", "health", "shorten"];

static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+$").expect("alias pattern is a valid regex")
});

/// Produces candidate short codes.
///
/// Implementations are pure: no storage access and no uniqueness guarantee.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Uniform random generator over [`ALPHABET`].
#[derive(Debug, Clone, Copy)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| {
                let idx = rng.random_range(0..ALPHABET.len());
                ALPHABET[idx] as char
            })
            .collect()
    }
}

/// Returns true if `code` collides with a fixed route segment.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Validates a caller-supplied alias.
///
/// # Rules
///
/// - Length: 4-20 characters
/// - Allowed characters: ASCII letters, digits, underscore
/// - Cannot be a reserved route segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_alias(alias: &str) -> Result<(), AppError> {
    let length = alias.chars().count();
    if !(MIN_ALIAS_LENGTH..=MAX_ALIAS_LENGTH).contains(&length) {
        return Err(AppError::bad_request(
            "Custom alias must be between 4 and 20 characters",
            json!({ "custom_alias": alias, "provided_length": length }),
        ));
    }

    if !ALIAS_REGEX.is_match(alias) {
        return Err(AppError::bad_request(
            "Custom alias can only contain letters, digits, and underscores",
            json!({ "custom_alias": alias }),
        ));
    }

    if is_reserved_code(alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            json!({ "custom_alias": alias }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_default_length() {
        let code = RandomCodeGenerator::default().generate();
        assert_eq!(code.len(), DEFAULT_CODE_LENGTH);
    }

    #[test]
    fn test_generate_configured_length() {
        let generator = RandomCodeGenerator::new(10);
        for _ in 0..100 {
            assert_eq!(generator.generate().len(), 10);
        }
    }

    #[test]
    fn test_generate_uses_alphabet_only() {
        let generator = RandomCodeGenerator::default();
        for _ in 0..1000 {
            let code = generator.generate();
            assert!(code.bytes().all(|b| ALPHABET.contains(&b)), "{code}");
        }
    }

    #[test]
    fn test_generate_covers_all_symbol_classes() {
        let generator = RandomCodeGenerator::new(64);
        let joined: String = (0..50).map(|_| generator.generate()).collect();

        assert!(joined.chars().any(|c| c.is_ascii_uppercase()));
        assert!(joined.chars().any(|c| c.is_ascii_lowercase()));
        assert!(joined.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_produces_distinct_codes() {
        let generator = RandomCodeGenerator::default();
        let codes: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_alias_too_short() {
        let err = validate_custom_alias("ab").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_string().contains("between 4 and 20"));
    }

    #[test]
    fn test_alias_boundaries() {
        assert!(validate_custom_alias("abcd").is_ok());
        assert!(validate_custom_alias(&"a".repeat(20)).is_ok());
        assert!(validate_custom_alias("abc").is_err());
        assert!(validate_custom_alias(&"a".repeat(21)).is_err());
    }

    #[test]
    fn test_alias_with_underscore_and_digits() {
        assert!(validate_custom_alias("valid_alias1").is_ok());
        assert!(validate_custom_alias("My_Custom_Alias").is_ok());
        assert!(validate_custom_alias("2024_promo").is_ok());
    }

    #[test]
    fn test_alias_rejects_other_characters() {
        for alias in ["my-alias", "my alias", "alias!", "ali.as", "ÄÖÜßabc"] {
            let err = validate_custom_alias(alias).unwrap_err();
            assert!(
                matches!(err, AppError::Validation { .. }),
                "'{alias}' should be rejected"
            );
        }
    }

    #[test]
    fn test_alias_rejects_reserved() {
        for &reserved in RESERVED_CODES {
            assert!(
                validate_custom_alias(reserved).is_err(),
                "Reserved alias '{reserved}' should be invalid"
            );
        }
    }

    #[test]
    fn test_alias_empty_string() {
        assert!(validate_custom_alias("").is_err());
    }
}
