//! Aggregate reporting service.

use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{AnalyticsRepository, UrlSummary};
use crate::error::AppError;

/// Service for summary statistics over active short URLs.
///
/// Holds no state of its own; every call reads the store.
pub struct AnalyticsService<R: AnalyticsRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: AnalyticsRepository + ?Sized> AnalyticsService<R> {
    /// Creates a new analytics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves the most visited active URLs.
    ///
    /// Ordered by clicks descending; equal counts keep ascending id order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn most_clicked(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.most_clicked(limit).await
    }

    /// Computes totals over active URLs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn summary(&self) -> Result<UrlSummary, AppError> {
        self.repository.summary().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAnalyticsRepository;
    use chrono::Utc;

    fn record(id: i64, code: &str, clicks: i64) -> UrlRecord {
        UrlRecord {
            id,
            original_url: format!("https://example.com/{id}"),
            short_code: code.to_string(),
            is_custom: false,
            clicks,
            created_at: Utc::now(),
            updated_at: None,
            is_deleted: false,
        }
    }

    #[tokio::test]
    async fn test_most_clicked_passes_limit() {
        let mut mock_repo = MockAnalyticsRepository::new();
        let rows = vec![record(2, "second", 9), record(1, "first1", 3)];
        mock_repo
            .expect_most_clicked()
            .withf(|limit| *limit == 2)
            .times(1)
            .returning(move |_| Ok(rows.clone()));

        let service = AnalyticsService::new(Arc::new(mock_repo));
        let result = service.most_clicked(2).await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].short_code, "second");
        assert_eq!(result[0].clicks, 9);
    }

    #[tokio::test]
    async fn test_summary() {
        let mut mock_repo = MockAnalyticsRepository::new();
        mock_repo.expect_summary().times(1).returning(|| {
            Ok(UrlSummary {
                total_urls: 2,
                total_clicks: 7,
                total_custom_urls: 1,
            })
        });

        let service = AnalyticsService::new(Arc::new(mock_repo));
        let summary = service.summary().await.unwrap();

        assert_eq!(summary.total_urls, 2);
        assert_eq!(summary.total_clicks, 7);
        assert_eq!(summary.total_custom_urls, 1);
    }

    #[tokio::test]
    async fn test_summary_propagates_store_error() {
        let mut mock_repo = MockAnalyticsRepository::new();
        mock_repo.expect_summary().returning(|| {
            Err(AppError::internal("Database error", serde_json::json!({})))
        });

        let service = AnalyticsService::new(Arc::new(mock_repo));
        assert!(matches!(
            service.summary().await,
            Err(AppError::Internal { .. })
        ));
    }
}
