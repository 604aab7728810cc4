//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, UrlService};
use crate::domain::repositories::{AnalyticsRepository, UrlRepository};

/// Service handles shared by all requests.
///
/// Cloning is cheap; every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<dyn UrlRepository>>,
    pub analytics_service: Arc<AnalyticsService<dyn AnalyticsRepository>>,
}

impl AppState {
    pub fn new(
        url_service: Arc<UrlService<dyn UrlRepository>>,
        analytics_service: Arc<AnalyticsService<dyn AnalyticsRepository>>,
    ) -> Self {
        Self {
            url_service,
            analytics_service,
        }
    }
}
