//! DTOs for analytics endpoints.

use serde::Serialize;

use crate::domain::repositories::UrlSummary;

/// Aggregate counts over active records.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub total_urls: i64,
    pub total_clicks: i64,
    pub total_custom_urls: i64,
}

impl From<UrlSummary> for SummaryResponse {
    fn from(summary: UrlSummary) -> Self {
        Self {
            total_urls: summary.total_urls,
            total_clicks: summary.total_clicks,
            total_custom_urls: summary.total_custom_urls,
        }
    }
}
