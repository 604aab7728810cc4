//! Handlers for URL resource endpoints (get, list, update, delete).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use super::url_response;
use crate::api::dto::pagination::ListParams;
use crate::api::dto::update_url::UpdateUrlRequest;
use crate::api::dto::url::UrlResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a short URL record without counting a visit.
///
/// # Endpoint
///
/// `GET /urls/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or deleted.
pub async fn get_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlResponse>, AppError> {
    let record = state.url_service.get_url(&code).await?;
    Ok(Json(url_response(&state, record)))
}

/// Lists active short URLs ordered by id.
///
/// # Endpoint
///
/// `GET /urls?skip=0&limit=100`
///
/// # Errors
///
/// Returns 400 Bad Request for a negative `skip` or a `limit` outside 1..=1000.
pub async fn list_urls_handler(
    Query(params): Query<ListParams>,
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlResponse>>, AppError> {
    let (skip, limit) = params.skip_and_limit()?;

    let records = state.url_service.list_urls(skip, limit).await?;

    Ok(Json(
        records
            .into_iter()
            .map(|record| url_response(&state, record))
            .collect(),
    ))
}

/// Points a short code at a new destination.
///
/// # Endpoint
///
/// `PUT /urls/{code}`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://new-destination.com" }
/// ```
///
/// The short code and click count are kept. An empty body returns the record
/// unchanged.
///
/// # Errors
///
/// - 404 Not Found if the code is unknown or deleted
/// - 400 Bad Request if the URL is malformed
pub async fn update_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateUrlRequest>,
) -> Result<Json<UrlResponse>, AppError> {
    payload.validate()?;

    let record = state
        .url_service
        .update_url(&code, payload.original_url.as_deref())
        .await?;

    Ok(Json(url_response(&state, record)))
}

/// Soft-deletes a short URL.
///
/// # Endpoint
///
/// `DELETE /urls/{code}`
///
/// The record stays in the database with `is_deleted` set; its code becomes
/// free for a future allocation.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or already deleted.
pub async fn delete_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.url_service.delete_url(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}
