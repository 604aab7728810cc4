//! PostgreSQL implementation of the analytics repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::pg_url_repository::UrlRow;
use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{AnalyticsRepository, UrlSummary};
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct SummaryRow {
    total_urls: i64,
    total_clicks: i64,
    total_custom_urls: i64,
}

/// PostgreSQL repository for aggregate queries over `active_urls`.
pub struct PgAnalyticsRepository {
    pool: Arc<PgPool>,
}

impl PgAnalyticsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsRepository for PgAnalyticsRepository {
    async fn most_clicked(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_code, is_custom, clicks,
                   created_at, updated_at, is_deleted
            FROM active_urls
            ORDER BY clicks DESC, id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn summary(&self) -> Result<UrlSummary, AppError> {
        let row = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT
                COUNT(*) AS total_urls,
                COALESCE(SUM(clicks), 0)::BIGINT AS total_clicks,
                COUNT(*) FILTER (WHERE is_custom) AS total_custom_urls
            FROM active_urls
            "#,
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(UrlSummary {
            total_urls: row.total_urls,
            total_clicks: row.total_clicks,
            total_custom_urls: row.total_custom_urls,
        })
    }
}
