//! API route configuration.

use crate::api::handlers::{
    delete_url_handler, get_url_handler, list_urls_handler, most_clicked_handler,
    redirect_handler, shorten_handler, summary_handler, update_url_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// URL resource and analytics routes.
///
/// # Endpoints
///
/// - `GET    /urls`                 - List active URLs (`skip`, `limit`)
/// - `POST   /urls/shorten`         - Create a short URL
/// - `GET    /urls/{code}`          - Fetch a record without counting a visit
/// - `PUT    /urls/{code}`          - Change the destination
/// - `DELETE /urls/{code}`          - Soft-delete
/// - `GET    /urls/{code}/redirect` - Redirect and count a visit
/// - `GET    /analytics/urls`       - Most clicked URLs (`limit`)
/// - `GET    /analytics/summary`    - Totals over active URLs
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", get(list_urls_handler))
        .route("/urls/shorten", post(shorten_handler))
        .route(
            "/urls/{code}",
            get(get_url_handler)
                .put(update_url_handler)
                .delete(delete_url_handler),
        )
        .route("/urls/{code}/redirect", get(redirect_handler))
        .route("/analytics/urls", get(most_clicked_handler))
        .route("/analytics/summary", get(summary_handler))
}
