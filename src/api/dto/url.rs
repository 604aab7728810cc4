//! URL resource representation.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// JSON representation of a short URL record.
///
/// `short_url` is the configured base URL joined with `short_code`. The
/// soft-delete flag is never exposed; deleted records are not served.
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub is_custom: bool,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UrlResponse {
    pub fn new(record: UrlRecord, short_url: String) -> Self {
        Self {
            id: record.id,
            original_url: record.original_url,
            short_code: record.short_code,
            short_url,
            is_custom: record.is_custom,
            clicks: record.clicks,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
