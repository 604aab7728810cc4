//! Query parameters for listing endpoints.

use serde::Deserialize;
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};

use crate::error::AppError;

pub const DEFAULT_LIST_LIMIT: i64 = 100;
pub const MAX_LIST_LIMIT: i64 = 1000;
pub const DEFAULT_TOP_LIMIT: i64 = 10;
pub const MAX_TOP_LIMIT: i64 = 100;

/// `GET /urls?skip=&limit=`
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub skip: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl ListParams {
    /// Validates the parameters and applies defaults.
    ///
    /// # Defaults
    ///
    /// - `skip`: 0
    /// - `limit`: 100
    ///
    /// # Returns
    ///
    /// `(skip, limit)` ready for the repository.
    pub fn skip_and_limit(&self) -> Result<(i64, i64), AppError> {
        let skip = self.skip.unwrap_or(0);
        let limit = self.limit.unwrap_or(DEFAULT_LIST_LIMIT);

        if skip < 0 {
            return Err(AppError::bad_request(
                "skip must not be negative",
                json!({ "skip": skip }),
            ));
        }

        check_limit(limit, MAX_LIST_LIMIT)?;
        Ok((skip, limit))
    }
}

/// `GET /analytics/urls?limit=`
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct MostClickedParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl MostClickedParams {
    /// Returns the validated limit (default 10, at most 100).
    pub fn limit(&self) -> Result<i64, AppError> {
        let limit = self.limit.unwrap_or(DEFAULT_TOP_LIMIT);
        check_limit(limit, MAX_TOP_LIMIT)?;
        Ok(limit)
    }
}

fn check_limit(limit: i64, max: i64) -> Result<(), AppError> {
    if !(1..=max).contains(&limit) {
        return Err(AppError::bad_request(
            format!("limit must be between 1 and {max}"),
            json!({ "limit": limit }),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(skip: Option<i64>, limit: Option<i64>) -> ListParams {
        ListParams { skip, limit }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(params(None, None).skip_and_limit().unwrap(), (0, 100));
    }

    #[test]
    fn test_custom_values() {
        assert_eq!(params(Some(20), Some(5)).skip_and_limit().unwrap(), (20, 5));
    }

    #[test]
    fn test_negative_skip_is_error() {
        assert!(params(Some(-1), None).skip_and_limit().is_err());
    }

    #[test]
    fn test_limit_bounds() {
        assert!(params(None, Some(0)).skip_and_limit().is_err());
        assert!(params(None, Some(1)).skip_and_limit().is_ok());
        assert!(params(None, Some(1000)).skip_and_limit().is_ok());
        assert!(params(None, Some(1001)).skip_and_limit().is_err());
    }

    #[test]
    fn test_most_clicked_limit() {
        assert_eq!(MostClickedParams { limit: None }.limit().unwrap(), 10);
        assert_eq!(MostClickedParams { limit: Some(100) }.limit().unwrap(), 100);
        assert!(MostClickedParams { limit: Some(101) }.limit().is_err());
        assert!(MostClickedParams { limit: Some(0) }.limit().is_err());
    }
}
