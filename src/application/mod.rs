//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Short code allocation, redirects, update and delete
//! - [`services::analytics_service::AnalyticsService`] - Most-clicked listing and summary counts

pub mod services;
