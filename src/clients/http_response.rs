//! HTTP response types for the WordPress API client.
//!
//! This module provides the [`WpResponse`] type with typed decoding and
//! WordPress-specific header parsing.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::error::Error;

/// A successful HTTP response from the WordPress REST API.
///
/// Contains the status code, headers, parsed JSON body, and the pagination
/// totals WordPress reports via headers on list endpoints.
#[derive(Clone, Debug)]
pub struct WpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Total matching items (from `X-WP-Total`).
    pub total: Option<u64>,
    /// Total pages at the requested page size (from `X-WP-TotalPages`).
    pub total_pages: Option<u64>,
    /// Seconds to wait before retrying (from `Retry-After`).
    pub retry_after: Option<f64>,
}

impl WpResponse {
    /// Creates a new `WpResponse`, parsing the WordPress headers:
    ///
    /// - `X-WP-Total` -> `total`
    /// - `X-WP-TotalPages` -> `total_pages`
    /// - `Retry-After` -> `retry_after`
    #[must_use]
    pub fn new(
        status: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        let total = Self::header_value(&headers, "x-wp-total");
        let total_pages = Self::header_value(&headers, "x-wp-totalpages");
        // "NaN" and "-1" both parse as f64; only finite non-negative values
        // are usable as a wait time.
        let retry_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|seconds| seconds.is_finite() && *seconds >= 0.0);

        Self {
            status,
            headers,
            body,
            total,
            total_pages,
            retry_after,
        }
    }

    fn header_value(headers: &HashMap<String, Vec<String>>, name: &str) -> Option<u64> {
        headers
            .get(name)
            .and_then(|values| values.first())
            .and_then(|value| value.parse().ok())
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the first value of the named header, if present.
    ///
    /// Header names are matched lowercased.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Decodes the body into a typed resource.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the body does not match the target shape.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_value(self.body.clone()).map_err(|e| Error::Decode {
            message: e.to_string(),
        })
    }

    /// Decodes the body into a list of typed resources.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the body is not a JSON array or an
    /// element does not match the target shape.
    pub fn decode_list<T: DeserializeOwned>(&self) -> Result<Vec<T>, Error> {
        if !self.body.is_array() {
            return Err(Error::Decode {
                message: "expected a JSON array".to_string(),
            });
        }
        self.decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers_with(name: &str, value: &str) -> HashMap<String, Vec<String>> {
        let mut headers = HashMap::new();
        headers.insert(name.to_string(), vec![value.to_string()]);
        headers
    }

    #[test]
    fn test_is_ok_covers_2xx_only() {
        assert!(WpResponse::new(200, HashMap::new(), json!({})).is_ok());
        assert!(WpResponse::new(204, HashMap::new(), json!(null)).is_ok());
        assert!(!WpResponse::new(404, HashMap::new(), json!({})).is_ok());
        assert!(!WpResponse::new(500, HashMap::new(), json!({})).is_ok());
    }

    #[test]
    fn test_pagination_headers_parsed() {
        let mut headers = headers_with("x-wp-total", "57");
        headers.insert("x-wp-totalpages".to_string(), vec!["6".to_string()]);

        let response = WpResponse::new(200, headers, json!([]));
        assert_eq!(response.total, Some(57));
        assert_eq!(response.total_pages, Some(6));
    }

    #[test]
    fn test_missing_pagination_headers_are_none() {
        let response = WpResponse::new(200, HashMap::new(), json!([]));
        assert!(response.total.is_none());
        assert!(response.total_pages.is_none());
    }

    #[test]
    fn test_unparseable_total_is_none() {
        let response = WpResponse::new(200, headers_with("x-wp-total", "lots"), json!([]));
        assert!(response.total.is_none());
    }

    #[test]
    fn test_retry_after_parsing() {
        let response = WpResponse::new(429, headers_with("retry-after", "2.5"), json!({}));
        assert!((response.retry_after.unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unusable_retry_after_is_discarded() {
        let response = WpResponse::new(429, headers_with("retry-after", "-1"), json!({}));
        assert!(response.retry_after.is_none());

        let response = WpResponse::new(429, headers_with("retry-after", "NaN"), json!({}));
        assert!(response.retry_after.is_none());

        let response = WpResponse::new(429, headers_with("retry-after", "inf"), json!({}));
        assert!(response.retry_after.is_none());
    }

    #[test]
    fn test_decode_list_rejects_non_array() {
        #[derive(serde::Deserialize)]
        struct Item {
            #[allow(dead_code)]
            id: u64,
        }

        let response = WpResponse::new(200, HashMap::new(), json!({"id": 1}));
        assert!(matches!(
            response.decode_list::<Item>(),
            Err(Error::Decode { .. })
        ));
    }
}
