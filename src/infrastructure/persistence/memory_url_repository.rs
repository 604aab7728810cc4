//! In-memory implementation of the URL and analytics repositories.
//!
//! Intended for local runs, load tests and integration tests. State lives in
//! the process and is lost on restart; it is not shared between processes.

use async_trait::async_trait;
use chrono::Utc;
use std::cmp::Reverse;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::{AnalyticsRepository, RecordScope, UrlRepository, UrlSummary};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Store {
    /// Records in insertion order; `records[i].id == i + 1`.
    records: Vec<UrlRecord>,
    /// Active short code -> index into `records`.
    active_codes: HashMap<String, usize>,
}

impl Store {
    fn active(&self) -> impl Iterator<Item = &UrlRecord> {
        self.records
            .iter()
            .filter(|record| RecordScope::Active.admits(record))
    }

    fn active_mut(&mut self, short_code: &str) -> Option<&mut UrlRecord> {
        let idx = *self.active_codes.get(short_code)?;
        self.records.get_mut(idx)
    }
}

/// Process-local store with the same guarantees as the PostgreSQL schema.
///
/// All mutations take the write lock, so the uniqueness check and the insert
/// form one critical section. The lock is never held across an await point.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    store: RwLock<Store>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn insert(&self, new_url: NewUrl) -> Result<Option<UrlRecord>, AppError> {
        let mut store = self.store.write().await;

        if store.active_codes.contains_key(&new_url.short_code) {
            return Ok(None);
        }

        let idx = store.records.len();
        let record = UrlRecord {
            id: idx as i64 + 1,
            original_url: new_url.original_url,
            short_code: new_url.short_code,
            is_custom: new_url.is_custom,
            clicks: 0,
            created_at: Utc::now(),
            updated_at: None,
            is_deleted: false,
        };

        store.active_codes.insert(record.short_code.clone(), idx);
        store.records.push(record.clone());

        Ok(Some(record))
    }

    async fn find_by_code(
        &self,
        short_code: &str,
        scope: RecordScope,
    ) -> Result<Option<UrlRecord>, AppError> {
        let store = self.store.read().await;

        if let Some(&idx) = store.active_codes.get(short_code) {
            return Ok(store.records.get(idx).cloned());
        }

        Ok(store
            .records
            .iter()
            .rev()
            .filter(|record| scope.admits(record))
            .find(|record| record.short_code == short_code)
            .cloned())
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let store = self.store.read().await;

        Ok(store
            .active()
            .find(|record| record.original_url == original_url)
            .cloned())
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        let store = self.store.read().await;

        Ok(store
            .active()
            .skip(skip.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn record_click(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let mut store = self.store.write().await;

        Ok(store.active_mut(short_code).map(|record| {
            record.clicks += 1;
            record.updated_at = Some(Utc::now());
            record.clone()
        }))
    }

    async fn update_original_url(
        &self,
        short_code: &str,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let mut store = self.store.write().await;

        Ok(store.active_mut(short_code).map(|record| {
            record.original_url = original_url.to_string();
            record.updated_at = Some(Utc::now());
            record.clone()
        }))
    }

    async fn soft_delete(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let mut store = self.store.write().await;

        let Some(idx) = store.active_codes.remove(short_code) else {
            return Ok(None);
        };

        Ok(store.records.get_mut(idx).map(|record| {
            record.is_deleted = true;
            record.updated_at = Some(Utc::now());
            record.clone()
        }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
impl AnalyticsRepository for InMemoryUrlRepository {
    async fn most_clicked(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        let store = self.store.read().await;

        let mut records: Vec<UrlRecord> = store.active().cloned().collect();
        records.sort_by_key(|record| (Reverse(record.clicks), record.id));
        records.truncate(limit.max(0) as usize);

        Ok(records)
    }

    async fn summary(&self) -> Result<UrlSummary, AppError> {
        let store = self.store.read().await;

        Ok(store.active().fold(UrlSummary::default(), |mut acc, record| {
            acc.total_urls += 1;
            acc.total_clicks += record.clicks;
            acc.total_custom_urls += i64::from(record.is_custom);
            acc
        }))
    }
}
