//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoints
///
/// - `GET /{code}`
/// - `GET /urls/{code}/redirect`
///
/// The click counter is incremented in the store before the response is
/// sent, so the count is exact.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or deleted.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.url_service.resolve(&code).await?;

    Ok(Redirect::temporary(&original_url))
}
