//! URL record entity, the only persisted entity of the service.

use chrono::{DateTime, Utc};

/// A stored mapping between a short code and an original URL.
///
/// `short_code` is unique among records with `is_deleted == false`; once a
/// record is soft-deleted its code may be handed out again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub is_custom: bool,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
}

impl UrlRecord {
    /// Returns true if the record has not been soft-deleted.
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }
}

/// Input data for inserting a new record.
///
/// `clicks`, timestamps and the soft-delete flag are always initialised by the
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrl {
    pub original_url: String,
    pub short_code: String,
    pub is_custom: bool,
}

impl NewUrl {
    /// A record whose code came from the code generator.
    pub fn generated(original_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_code: short_code.into(),
            is_custom: false,
        }
    }

    /// A record whose code is a caller-supplied alias.
    pub fn custom(original_url: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_code: alias.into(),
            is_custom: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_activity() {
        let mut record = UrlRecord {
            id: 1,
            original_url: "https://example.com/".to_string(),
            short_code: "abc123".to_string(),
            is_custom: false,
            clicks: 0,
            created_at: Utc::now(),
            updated_at: None,
            is_deleted: false,
        };
        assert!(record.is_active());

        record.is_deleted = true;
        assert!(!record.is_active());
    }

    #[test]
    fn test_new_url_constructors() {
        let generated = NewUrl::generated("https://rust-lang.org/", "Xy12Ab");
        assert!(!generated.is_custom);
        assert_eq!(generated.short_code, "Xy12Ab");

        let custom = NewUrl::custom("https://rust-lang.org/", "rust_home");
        assert!(custom.is_custom);
        assert_eq!(custom.short_code, "rust_home");
    }
}
