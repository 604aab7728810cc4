//! Business logic services for the application layer.

pub mod analytics_service;
pub mod url_service;

pub use analytics_service::AnalyticsService;
pub use url_service::{Allocation, DEFAULT_MAX_ATTEMPTS, UrlService};
