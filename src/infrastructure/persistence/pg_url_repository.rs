//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::{RecordScope, UrlRepository};
use crate::error::AppError;

/// Row shape shared by every query against `urls` / `active_urls`.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UrlRow {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub is_custom: bool,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord {
            id: row.id,
            original_url: row.original_url,
            short_code: row.short_code,
            is_custom: row.is_custom,
            clicks: row.clicks,
            created_at: row.created_at,
            updated_at: row.updated_at,
            is_deleted: row.is_deleted,
        }
    }
}

/// PostgreSQL repository for URL records.
///
/// Reads and mutations of live records target the `active_urls` view, so the
/// soft-delete predicate is defined once in the schema. Uniqueness of active
/// codes is enforced by the partial unique index `urls_short_code_active_key`.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, new_url: NewUrl) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (original_url, short_code, is_custom)
            VALUES ($1, $2, $3)
            ON CONFLICT (short_code) WHERE is_deleted = FALSE DO NOTHING
            RETURNING id, original_url, short_code, is_custom, clicks,
                      created_at, updated_at, is_deleted
            "#,
        )
        .bind(&new_url.original_url)
        .bind(&new_url.short_code)
        .bind(new_url.is_custom)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_by_code(
        &self,
        short_code: &str,
        scope: RecordScope,
    ) -> Result<Option<UrlRecord>, AppError> {
        let query = match scope {
            RecordScope::Active => {
                r#"
                SELECT id, original_url, short_code, is_custom, clicks,
                       created_at, updated_at, is_deleted
                FROM active_urls
                WHERE short_code = $1
                "#
            }
            RecordScope::IncludeDeleted => {
                r#"
                SELECT id, original_url, short_code, is_custom, clicks,
                       created_at, updated_at, is_deleted
                FROM urls
                WHERE short_code = $1
                ORDER BY is_deleted ASC, id DESC
                LIMIT 1
                "#
            }
        };

        let row = sqlx::query_as::<_, UrlRow>(query)
            .bind(short_code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_code, is_custom, clicks,
                   created_at, updated_at, is_deleted
            FROM active_urls
            WHERE original_url = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_code, is_custom, clicks,
                   created_at, updated_at, is_deleted
            FROM active_urls
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn record_click(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            UPDATE active_urls
            SET clicks = clicks + 1, updated_at = NOW()
            WHERE short_code = $1
            RETURNING id, original_url, short_code, is_custom, clicks,
                      created_at, updated_at, is_deleted
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn update_original_url(
        &self,
        short_code: &str,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            UPDATE active_urls
            SET original_url = $2, updated_at = NOW()
            WHERE short_code = $1
            RETURNING id, original_url, short_code, is_custom, clicks,
                      created_at, updated_at, is_deleted
            "#,
        )
        .bind(short_code)
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn soft_delete(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            UPDATE active_urls
            SET is_deleted = TRUE, updated_at = NOW()
            WHERE short_code = $1
            RETURNING id, original_url, short_code, is_custom, clicks,
                      created_at, updated_at, is_deleted
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
