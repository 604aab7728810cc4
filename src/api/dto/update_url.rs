//! DTO for the URL update endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request body for `PUT /urls/{code}`.
///
/// An absent `original_url` leaves the record unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUrlRequest {
    #[validate(url(message = "Invalid URL format"))]
    #[serde(default)]
    pub original_url: Option<String>,
}
