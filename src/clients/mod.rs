//! HTTP plumbing shared by every API call.
//!
//! - [`WpRequest`]: a described exchange (method, endpoint, query, body)
//! - [`WpResponse`]: a 2xx response with typed decoding and pagination totals
//! - [`HttpClient`]: the engine that dispatches requests with credential
//!   injection, retry, and error classification

mod http_client;
mod http_request;
mod http_response;

pub use http_client::{HttpClient, BACKOFF_BASE_MS, SDK_VERSION};
pub use http_request::{HttpMethod, RawBody, WpRequest, WpRequestBuilder};
pub use http_response::WpResponse;
