//! Handler for the shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use super::url_response;
use crate::api::dto::shorten::ShortenRequest;
use crate::api::dto::url::UrlResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /urls/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "custom_alias": "my_link"   // optional
/// }
/// ```
///
/// Without an alias, shortening a URL that already has an active record
/// returns that record instead of allocating a second code. The status is
/// 201 in both cases.
///
/// # Errors
///
/// - 400 Bad Request for a malformed URL or alias
/// - 409 Conflict if the alias is held by an active record
/// - 503 Service Unavailable if no free code was found
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<UrlResponse>), AppError> {
    payload.validate()?;

    let allocation = state
        .url_service
        .shorten(&payload.original_url, payload.custom_alias.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(url_response(&state, allocation.url)),
    ))
}
