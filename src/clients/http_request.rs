//! HTTP request types for the WordPress API client.
//!
//! This module provides the [`WpRequest`] type and its builder for
//! describing one REST exchange before the engine dispatches it.

use std::fmt;
use std::time::Duration;

use crate::error::Error;
use crate::query::Query;

/// HTTP methods used against the WordPress REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if re-sending the request after an ambiguous transport
    /// failure cannot create a duplicate resource.
    ///
    /// GET and DELETE are safe to re-send; PUT updates are full overwrites of
    /// an existing resource so a duplicate send converges to the same state.
    /// POST creates are not idempotent and need an explicit opt-in
    /// ([`WpRequestBuilder::retry_non_idempotent`]) to be retried when the
    /// first send may already have reached the server.
    #[must_use]
    pub const fn is_idempotent(self) -> bool {
        !matches!(self, Self::Post)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A raw binary request body, used for media uploads.
///
/// WordPress sideloads uploads from the raw request body; the server reads
/// the target file name from the `Content-Disposition` header.
#[derive(Clone, Debug)]
pub struct RawBody {
    /// File name reported via `Content-Disposition`.
    pub filename: String,
    /// MIME type sent as `Content-Type`.
    pub content_type: String,
    /// The payload bytes.
    pub bytes: Vec<u8>,
}

/// A request to be sent to the WordPress REST API.
///
/// The `endpoint` is relative to the API root (`/wp-json/wp/v2`), e.g.
/// `posts` or `posts/42`.
///
/// # Example
///
/// ```rust
/// use wordpress_api::clients::{HttpMethod, WpRequest};
/// use serde_json::json;
///
/// let request = WpRequest::builder(HttpMethod::Post, "posts")
///     .body(json!({"title": "Hello", "status": "draft"}))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.endpoint, "posts");
/// ```
#[derive(Clone, Debug)]
pub struct WpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The endpoint path, relative to the API root.
    pub endpoint: String,
    /// Query parameters to append to the URL.
    pub query: Query,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// A raw binary body, if any. Mutually exclusive with `body`.
    pub raw_body: Option<RawBody>,
    /// Per-request timeout override.
    pub timeout: Option<Duration>,
    /// Allows retrying a non-idempotent request after an ambiguous
    /// transport failure. Off by default.
    pub retry_non_idempotent: bool,
}

impl WpRequest {
    /// Creates a new builder for constructing a `WpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, endpoint: impl Into<String>) -> WpRequestBuilder {
        WpRequestBuilder::new(method, endpoint)
    }

    /// Validates the request before it is dispatched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the method is `Post` or `Put`
    /// and no body is set, or if both a JSON and a raw body are set.
    pub fn verify(&self) -> Result<(), Error> {
        if self.body.is_some() && self.raw_body.is_some() {
            return Err(Error::InvalidRequest {
                message: "a request cannot carry both a JSON and a raw body".to_string(),
            });
        }
        if matches!(self.method, HttpMethod::Post | HttpMethod::Put)
            && self.body.is_none()
            && self.raw_body.is_none()
        {
            return Err(Error::InvalidRequest {
                message: format!("{} requests require a body", self.method),
            });
        }
        Ok(())
    }
}

/// Builder for [`WpRequest`] instances.
#[derive(Debug)]
pub struct WpRequestBuilder {
    method: HttpMethod,
    endpoint: String,
    query: Query,
    body: Option<serde_json::Value>,
    raw_body: Option<RawBody>,
    timeout: Option<Duration>,
    retry_non_idempotent: bool,
}

impl WpRequestBuilder {
    fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            query: Query::none(),
            body: None,
            raw_body: None,
            timeout: None,
            retry_non_idempotent: false,
        }
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a raw binary body, for file uploads.
    #[must_use]
    pub fn raw_body(
        mut self,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.raw_body = Some(RawBody {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes,
        });
        self
    }

    /// Overrides the configured timeout for this request only.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Opts this request into transport-failure retries even though its
    /// method is not idempotent.
    ///
    /// Use only when the operation is safe to repeat, for example a create
    /// the caller deduplicates by slug.
    #[must_use]
    pub const fn retry_non_idempotent(mut self) -> Self {
        self.retry_non_idempotent = true;
        self
    }

    /// Builds the [`WpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the request fails validation.
    pub fn build(self) -> Result<WpRequest, Error> {
        let request = WpRequest {
            method: self.method,
            endpoint: self.endpoint,
            query: self.query,
            body: self.body,
            raw_body: self.raw_body,
            timeout: self.timeout,
            retry_non_idempotent: self.retry_non_idempotent,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_idempotency_classification() {
        assert!(HttpMethod::Get.is_idempotent());
        assert!(HttpMethod::Put.is_idempotent());
        assert!(HttpMethod::Delete.is_idempotent());
        assert!(!HttpMethod::Post.is_idempotent());
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = WpRequest::builder(HttpMethod::Get, "posts").build().unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.endpoint, "posts");
        assert!(request.body.is_none());
        assert!(request.query.is_empty());
        assert!(!request.retry_non_idempotent);
    }

    #[test]
    fn test_verify_requires_body_for_post_and_put() {
        let result = WpRequest::builder(HttpMethod::Post, "posts").build();
        assert!(matches!(result, Err(Error::InvalidRequest { .. })));

        let result = WpRequest::builder(HttpMethod::Put, "posts/1").build();
        assert!(matches!(result, Err(Error::InvalidRequest { .. })));
    }

    #[test]
    fn test_delete_needs_no_body() {
        let request = WpRequest::builder(HttpMethod::Delete, "posts/1")
            .build()
            .unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn test_raw_body_satisfies_post_verification() {
        let request = WpRequest::builder(HttpMethod::Post, "media")
            .raw_body("shot.png", "image/png", vec![1, 2, 3])
            .build()
            .unwrap();

        assert!(request.body.is_none());
        let raw = request.raw_body.unwrap();
        assert_eq!(raw.filename, "shot.png");
        assert_eq!(raw.content_type, "image/png");
        assert_eq!(raw.bytes, vec![1, 2, 3]);
    }

    #[test]
    fn test_json_and_raw_body_are_exclusive() {
        let result = WpRequest::builder(HttpMethod::Post, "media")
            .body(json!({"title": "T"}))
            .raw_body("shot.png", "image/png", vec![1])
            .build();
        assert!(matches!(result, Err(Error::InvalidRequest { .. })));
    }

    #[test]
    fn test_post_with_body_builds() {
        let request = WpRequest::builder(HttpMethod::Post, "posts")
            .body(json!({"title": "T"}))
            .retry_non_idempotent()
            .build()
            .unwrap();
        assert!(request.retry_non_idempotent);
    }
}
