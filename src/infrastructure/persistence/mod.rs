//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - URL records in PostgreSQL
//! - [`PgAnalyticsRepository`] - Aggregate queries in PostgreSQL
//! - [`InMemoryUrlRepository`] - Process-local store implementing both traits

pub mod memory_url_repository;
pub mod pg_analytics_repository;
pub mod pg_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
pub use pg_analytics_repository::PgAnalyticsRepository;
pub use pg_url_repository::PgUrlRepository;
