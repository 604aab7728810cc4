//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod analytics;
pub mod health;
pub mod redirect;
pub mod shorten;
pub mod urls;

pub use analytics::{most_clicked_handler, summary_handler};
pub use health::{health_handler, index_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use urls::{delete_url_handler, get_url_handler, list_urls_handler, update_url_handler};

use crate::api::dto::url::UrlResponse;
use crate::domain::entities::UrlRecord;
use crate::state::AppState;

fn url_response(state: &AppState, record: UrlRecord) -> UrlResponse {
    let short_url = state.url_service.short_url(&record.short_code);
    UrlResponse::new(record, short_url)
}
