//! Repository trait for aggregate reporting over URL records.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Aggregate counts over active records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlSummary {
    pub total_urls: i64,
    pub total_clicks: i64,
    pub total_custom_urls: i64,
}

/// Read-only repository for analytics queries.
///
/// Soft-deleted records never contribute to any result.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAnalyticsRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - single-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Returns up to `limit` active records ordered by `clicks` descending,
    /// ties broken by ascending id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn most_clicked(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError>;

    /// Computes totals over active records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn summary(&self) -> Result<UrlSummary, AppError>;
}
