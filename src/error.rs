//! Error types for the WordPress API client.
//!
//! This module defines the single error taxonomy used throughout the crate.
//! Every failure surfaces as one [`Error`] variant; retries happen inside the
//! request engine and are never visible to callers except as latency.
//!
//! # Error Handling
//!
//! Each variant carries a stable machine-readable kind (see [`Error::kind`])
//! plus a human-readable message. Transient failures ([`Error::TransientService`],
//! [`Error::Transport`]) are distinguishable from permanent ones so callers can
//! decide whether to re-issue a request later.
//!
//! # Example
//!
//! ```rust,ignore
//! use wordpress_api::Error;
//!
//! match wp.posts().get(123).await {
//!     Ok(post) => println!("{:?}", post.title),
//!     Err(Error::NotFound { .. }) => println!("no such post"),
//!     Err(Error::TransientService { .. }) => println!("try again later"),
//!     Err(e) => println!("failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// All configuration constructors return `Result<T, ConfigError>` to enable
/// fail-fast validation before any network call is attempted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Site URL cannot be empty.
    #[error("Site URL cannot be empty. Please provide the URL of a WordPress site.")]
    EmptySiteUrl,

    /// Site URL is malformed.
    #[error("Invalid site URL '{url}'. Expected a URL with a host (e.g., 'https://example.com').")]
    InvalidSiteUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Retry ceiling must allow at least one attempt.
    #[error("max_retries must be at least 1 (it counts total attempts, including the first).")]
    ZeroRetries,
}

/// Unified error type for all WordPress API operations.
///
/// The retry policy is encoded in the taxonomy itself:
///
/// - never retried: [`Authentication`](Error::Authentication),
///   [`Validation`](Error::Validation), [`NotFound`](Error::NotFound),
///   [`Decode`](Error::Decode), [`InvalidQuery`](Error::InvalidQuery)
/// - retried at most once via credential refresh:
///   [`AuthenticationRejected`](Error::AuthenticationRejected)
/// - surfaced after the retry ceiling is exhausted:
///   [`TransientService`](Error::TransientService), [`Transport`](Error::Transport)
#[derive(Debug, Error)]
pub enum Error {
    /// Local credentials are absent or malformed. Raised before any network
    /// call is attempted.
    #[error("Authentication error: {message}")]
    Authentication {
        /// Description of what is wrong with the credentials.
        message: String,
    },

    /// The server rejected the supplied credentials (401/403) and the
    /// strategy's one refresh attempt (if supported) did not help.
    #[error("Server rejected credentials (HTTP {status}): {message}")]
    AuthenticationRejected {
        /// The HTTP status code (401 or 403).
        status: u16,
        /// The server-provided error message.
        message: String,
        /// The WordPress machine error code (e.g. `rest_cannot_create`).
        code: Option<String>,
    },

    /// The server rejected the request body or parameters (4xx other than
    /// auth/not-found). Carries the WordPress error payload verbatim.
    #[error("Request rejected (HTTP {status}): [{code}] {message}")]
    Validation {
        /// The HTTP status code.
        status: u16,
        /// The WordPress machine error code (e.g. `rest_invalid_param`).
        code: String,
        /// The server-provided human-readable message.
        message: String,
        /// The raw error payload as returned by the server.
        payload: serde_json::Value,
    },

    /// The requested resource does not exist (404). Never retried.
    #[error("Resource not found: {message}")]
    NotFound {
        /// The server-provided error message.
        message: String,
        /// The WordPress machine error code (e.g. `rest_post_invalid_id`).
        code: Option<String>,
    },

    /// The server kept responding 429/5xx until the retry ceiling was
    /// exhausted.
    #[error("Service unavailable after {attempts} attempts (last status {status}): {message}")]
    TransientService {
        /// The HTTP status code of the last response.
        status: u16,
        /// The number of attempts that were made.
        attempts: u32,
        /// The last server-provided error message.
        message: String,
    },

    /// A network-level failure (connection refused, DNS, timeout) persisted
    /// through the retry ceiling.
    #[error("Transport error after {attempts} attempt(s): {source}")]
    Transport {
        /// The number of attempts that were made.
        attempts: u32,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response body: {message}")]
    Decode {
        /// Description of the shape mismatch.
        message: String,
    },

    /// A query specification was built with an invalid value.
    #[error("Invalid query: {message}")]
    InvalidQuery {
        /// Description of the invalid clause.
        message: String,
    },

    /// A request was constructed in a shape the engine refuses to send,
    /// such as a create or update with no body. Raised before any network
    /// call is attempted.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Description of the structural problem.
        message: String,
    },

    /// The client configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Returns the stable machine-readable kind of this error.
    ///
    /// These strings are part of the public contract and will not change
    /// between releases; external layers may map them to their own status
    /// codes.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Authentication { .. } => "authentication",
            Self::AuthenticationRejected { .. } => "authentication_rejected",
            Self::Validation { .. } => "validation",
            Self::NotFound { .. } => "not_found",
            Self::TransientService { .. } => "transient_service",
            Self::Transport { .. } => "transport",
            Self::Decode { .. } => "decode",
            Self::InvalidQuery { .. } => "invalid_query",
            Self::InvalidRequest { .. } => "invalid_request",
            Self::Config(_) => "config",
        }
    }

    /// Returns `true` if re-issuing the same request later could succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::TransientService { .. } | Self::Transport { .. }
        )
    }
}
