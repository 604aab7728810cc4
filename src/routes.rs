//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Welcome message
//! - `GET  /health`  - Storage health check
//! - `GET  /{code}`  - Short link redirect
//! - `/urls/*`, `/analytics/*` - REST API, see [`crate::api::routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configurable origin list
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, index_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_allowed_origins` - allowed origins; empty or `*` allows any
pub fn app_router(state: AppState, cors_allowed_origins: &[String]) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, cors_allowed_origins))
}

/// Routes and middleware without path normalization.
pub fn router(state: AppState, cors_allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .merge(api::routes::api_routes())
        .with_state(state)
        .layer(cors::layer(cors_allowed_origins))
        .layer(tracing::layer())
}
