//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete stores in the infrastructure layer.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - URL record allocation, lookup and mutation
//! - [`AnalyticsRepository`] - Aggregate reporting
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod analytics_repository;
pub mod url_repository;

pub use analytics_repository::{AnalyticsRepository, UrlSummary};
pub use url_repository::{RecordScope, UrlRepository};

#[cfg(test)]
pub use analytics_repository::MockAnalyticsRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
