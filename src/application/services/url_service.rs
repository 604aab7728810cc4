//! Short URL allocation, resolution and lifecycle service.

use std::sync::Arc;

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::{RecordScope, UrlRepository};
use crate::error::AppError;
use crate::utils::code_generator::{
    CodeGenerator, RandomCodeGenerator, is_reserved_code, validate_custom_alias,
};
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;
use tracing::{debug, error, info, warn};

/// Default cap on generated candidates per allocation.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Outcome of [`UrlService::shorten`].
#[derive(Debug, Clone)]
pub struct Allocation {
    pub url: UrlRecord,
    /// False when an existing record for the same original URL was returned.
    pub created: bool,
}

impl Allocation {
    pub fn short_code(&self) -> &str {
        &self.url.short_code
    }

    pub fn is_custom(&self) -> bool {
        self.url.is_custom
    }
}

/// Service owning the short code namespace.
///
/// # Uniqueness
///
/// Codes are claimed by inserting directly; the repository rejects an insert
/// whose code is held by an active record and reports it as `None`. A
/// rejected generated candidate is replaced by a fresh one, a rejected custom
/// alias is a conflict. No check-then-insert window exists, so concurrent
/// allocations (including from other processes sharing the database) never
/// share an active code.
pub struct UrlService<R: UrlRepository + ?Sized, G: CodeGenerator = RandomCodeGenerator> {
    repository: Arc<R>,
    generator: G,
    base_url: String,
    max_attempts: usize,
}

impl<R: UrlRepository + ?Sized, G: CodeGenerator> UrlService<R, G> {
    /// Creates a new service.
    ///
    /// `base_url` is the public prefix short codes are appended to.
    pub fn new(repository: Arc<R>, generator: G, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            generator,
            base_url: base_url.into(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the retry cap of the generation loop (minimum 1).
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Shortens `original_url`, optionally under a caller-chosen alias.
    ///
    /// # Algorithm
    ///
    /// 1. Canonicalize the URL
    /// 2. Without an alias, return the existing active record for the URL if any
    /// 3. With an alias, validate it and claim it verbatim
    /// 4. Otherwise claim generated candidates until one is free
    ///
    /// An empty alias is treated as absent.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for a malformed URL or alias
    /// - [`AppError::Conflict`] if the alias is held by an active record
    /// - [`AppError::Unavailable`] if every generated candidate collided
    pub async fn shorten(
        &self,
        original_url: &str,
        custom_alias: Option<&str>,
    ) -> Result<Allocation, AppError> {
        let original_url = canonical_url(original_url)?;
        let custom_alias = custom_alias.filter(|alias| !alias.is_empty());

        if custom_alias.is_none()
            && let Some(existing) = self
                .repository
                .find_by_original_url(&original_url)
                .await?
        {
            debug!(short_code = %existing.short_code, "Reusing existing short code");
            return Ok(Allocation {
                url: existing,
                created: false,
            });
        }

        let url = match custom_alias {
            Some(alias) => self.claim_alias(original_url, alias).await?,
            None => self.claim_generated(original_url).await?,
        };

        info!(
            short_code = %url.short_code,
            is_custom = url.is_custom,
            "Short URL created"
        );

        Ok(Allocation { url, created: true })
    }

    async fn claim_alias(&self, original_url: String, alias: &str) -> Result<UrlRecord, AppError> {
        validate_custom_alias(alias)?;

        self.repository
            .insert(NewUrl::custom(original_url, alias))
            .await?
            .ok_or_else(|| {
                AppError::conflict(
                    "Custom alias already in use",
                    json!({ "custom_alias": alias }),
                )
            })
    }

    async fn claim_generated(&self, original_url: String) -> Result<UrlRecord, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate();
            if is_reserved_code(&code) {
                continue;
            }

            match self
                .repository
                .insert(NewUrl::generated(original_url.clone(), code.as_str()))
                .await?
            {
                Some(record) => return Ok(record),
                None => warn!(attempt, short_code = %code, "Short code collision"),
            }
        }

        error!(
            attempts = self.max_attempts,
            "Failed to allocate a unique short code"
        );
        Err(AppError::unavailable(
            "Failed to allocate a unique short code",
            json!({ "attempts": self.max_attempts }),
        ))
    }

    /// Resolves a short code for redirection and counts the visit.
    ///
    /// The counter is incremented atomically in the store before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown or deleted.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        let record = self
            .repository
            .record_click(short_code)
            .await?
            .ok_or_else(|| url_not_found(short_code))?;

        debug!(short_code, clicks = record.clicks, "Click recorded");
        Ok(record.original_url)
    }

    /// Retrieves an active record without counting a visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown or deleted.
    pub async fn get_url(&self, short_code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_code(short_code, RecordScope::Active)
            .await?
            .ok_or_else(|| url_not_found(short_code))
    }

    /// Retrieves a record regardless of its soft-delete flag.
    ///
    /// Operator tooling only.
    pub async fn get_url_including_deleted(&self, short_code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_code(short_code, RecordScope::IncludeDeleted)
            .await?
            .ok_or_else(|| url_not_found(short_code))
    }

    /// Points an existing short code at a new original URL.
    ///
    /// When `new_original_url` is `None` the record is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown or deleted.
    /// Returns [`AppError::Validation`] if the new URL is malformed.
    pub async fn update_url(
        &self,
        short_code: &str,
        new_original_url: Option<&str>,
    ) -> Result<UrlRecord, AppError> {
        let Some(new_original_url) = new_original_url else {
            return self.get_url(short_code).await;
        };

        let new_original_url = canonical_url(new_original_url)?;

        let record = self
            .repository
            .update_original_url(short_code, &new_original_url)
            .await?
            .ok_or_else(|| url_not_found(short_code))?;

        info!(short_code, "Short URL updated");
        Ok(record)
    }

    /// Soft-deletes a short code, making it available for reuse.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown or already deleted.
    pub async fn delete_url(&self, short_code: &str) -> Result<UrlRecord, AppError> {
        let record = self
            .repository
            .soft_delete(short_code)
            .await?
            .ok_or_else(|| url_not_found(short_code))?;

        info!(short_code, "Short URL deleted");
        Ok(record)
    }

    /// Lists active records ordered by ascending id.
    pub async fn list_urls(&self, skip: i64, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.list(skip, limit).await
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), short_code)
    }

    /// Checks store connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

fn canonical_url(input: &str) -> Result<String, AppError> {
    normalize_url(input).map_err(|e| {
        AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
    })
}

fn url_not_found(short_code: &str) -> AppError {
    AppError::not_found("URL not found", json!({ "short_code": short_code }))
}
