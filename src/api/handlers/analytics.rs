//! Handlers for analytics endpoints.

use axum::{
    Json,
    extract::{Query, State},
};

use super::url_response;
use crate::api::dto::analytics::SummaryResponse;
use crate::api::dto::pagination::MostClickedParams;
use crate::api::dto::url::UrlResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the most visited active URLs.
///
/// # Endpoint
///
/// `GET /analytics/urls?limit=10`
///
/// Sorted by clicks descending; equal counts are ordered by ascending id.
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` is outside 1..=100.
pub async fn most_clicked_handler(
    Query(params): Query<MostClickedParams>,
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlResponse>>, AppError> {
    let limit = params.limit()?;

    let records = state.analytics_service.most_clicked(limit).await?;

    Ok(Json(
        records
            .into_iter()
            .map(|record| url_response(&state, record))
            .collect(),
    ))
}

/// Returns totals over active URLs.
///
/// # Endpoint
///
/// `GET /analytics/summary`
///
/// # Response
///
/// ```json
/// { "total_urls": 2, "total_clicks": 15, "total_custom_urls": 1 }
/// ```
pub async fn summary_handler(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, AppError> {
    let summary = state.analytics_service.summary().await?;
    Ok(Json(summary.into()))
}
