//! Repository trait for URL record storage.

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Which records a lookup may see.
///
/// Every read path goes through [`RecordScope::Active`] unless it explicitly
/// opts into [`RecordScope::IncludeDeleted`]. The latter is used only by
/// operator tooling and is never reachable over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordScope {
    #[default]
    Active,
    IncludeDeleted,
}

impl RecordScope {
    /// Returns true if `record` is visible under this scope.
    pub fn admits(self, record: &UrlRecord) -> bool {
        match self {
            RecordScope::Active => record.is_active(),
            RecordScope::IncludeDeleted => true,
        }
    }
}

/// Repository interface for URL records.
///
/// Implementations must enforce uniqueness of `short_code` among active
/// records atomically with the insert: [`UrlRepository::insert`] returns
/// `Ok(None)` when another active record already holds the code. The
/// allocation loop treats that as a signal to retry, which keeps allocation
/// correct with any number of concurrent writers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - single-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record with `clicks = 0` and `created_at = now`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if the record was stored
    /// - `Ok(None)` if an active record already uses `new_url.short_code`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_url: NewUrl) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by short code within the given scope.
    ///
    /// With [`RecordScope::IncludeDeleted`] an active record is preferred over
    /// deleted ones; among deleted records the most recent wins.
    async fn find_by_code(
        &self,
        short_code: &str,
        scope: RecordScope,
    ) -> Result<Option<UrlRecord>, AppError>;

    /// Finds the oldest active record for an original URL.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<UrlRecord>, AppError>;

    /// Lists active records ordered by ascending id.
    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<UrlRecord>, AppError>;

    /// Atomically increments `clicks` of the active record holding `short_code`.
    ///
    /// Returns the updated record, or `Ok(None)` if no active record matches.
    async fn record_click(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Overwrites `original_url` and `updated_at` of an active record.
    ///
    /// `short_code` and `clicks` are left untouched. Returns `Ok(None)` if no
    /// active record matches.
    async fn update_original_url(
        &self,
        short_code: &str,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError>;

    /// Marks an active record as deleted and stamps `updated_at`.
    ///
    /// Returns the deleted record, or `Ok(None)` if the code is unknown or
    /// already deleted.
    async fn soft_delete(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Verifies that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
