//! The shared request engine.
//!
//! Every call in the crate, from any service facade or client shell, funnels
//! through [`HttpClient::execute`]. The engine owns credential injection,
//! retry with exponential backoff, the single-flight credential refresh on
//! 401/403, and the mapping from raw HTTP outcomes to [`Error`] variants.

use std::collections::HashMap;
use std::time::Duration;

use rand::Rng as _;

use crate::auth::CredentialContext;
use crate::clients::http_request::WpRequest;
use crate::clients::http_response::WpResponse;
use crate::config::WpConfig;
use crate::error::Error;

/// Base backoff delay, doubled on each retry.
pub const BACKOFF_BASE_MS: u64 = 500;

/// Longest wait a server-supplied `Retry-After` header is allowed to impose.
const RETRY_AFTER_CAP: Duration = Duration::from_secs(60);

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The request engine behind every API call.
///
/// Response classification:
///
/// - 2xx is decoded into the caller's type
/// - 401/403 triggers one credential refresh (for strategies that support
///   it) and one retry, then surfaces as [`Error::AuthenticationRejected`]
/// - 404 surfaces immediately as [`Error::NotFound`], never retried
/// - 429 and 5xx are retried with exponential backoff and jitter up to the
///   configured ceiling, then surface as [`Error::TransientService`]
/// - any other 4xx surfaces as [`Error::Validation`] with the server's
///   error payload attached verbatim
/// - transport failures are retried like 5xx, but only when the method is
///   idempotent or the request opted in, and surface as [`Error::Transport`]
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Resolved configuration (site URL, timeout, retry ceiling).
    config: WpConfig,
    /// Credential state shared by all requests on this client.
    auth: CredentialContext,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new engine for the given configuration and credentials.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: WpConfig, auth: CredentialContext) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}WordPress API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            auth,
        }
    }

    /// Returns the configuration this engine was built with.
    #[must_use]
    pub const fn config(&self) -> &WpConfig {
        &self.config
    }

    /// Returns the credential context this engine was built with.
    #[must_use]
    pub const fn auth(&self) -> &CredentialContext {
        &self.auth
    }

    /// Sends a request to the WordPress REST API.
    ///
    /// Retries happen inside this method; the caller observes either a 2xx
    /// response or a single classified error.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the classification described on
    /// [`HttpClient`].
    pub async fn execute(&self, request: WpRequest) -> Result<WpResponse, Error> {
        request.verify()?;

        let url = self.config.site_url().endpoint_url(&request.endpoint);
        let max_attempts = self.config.max_retries();
        let mut attempts: u32 = 0;
        let mut refreshed = false;

        loop {
            attempts += 1;

            let (credentials, generation) = self
                .auth
                .credentials(&self.client, self.config.site_url())
                .await?;

            let mut req_builder = match request.method {
                crate::clients::http_request::HttpMethod::Get => self.client.get(&url),
                crate::clients::http_request::HttpMethod::Post => self.client.post(&url),
                crate::clients::http_request::HttpMethod::Put => self.client.put(&url),
                crate::clients::http_request::HttpMethod::Delete => self.client.delete(&url),
            };

            req_builder = req_builder.header("Accept", "application/json");
            for (name, value) in credentials.headers() {
                req_builder = req_builder.header(*name, value);
            }
            if !request.query.is_empty() {
                req_builder = req_builder.query(request.query.params());
            }
            if let Some(body) = &request.body {
                req_builder = req_builder.json(body);
            }
            if let Some(raw) = &request.raw_body {
                req_builder = req_builder
                    .header("Content-Type", raw.content_type.as_str())
                    .header(
                        "Content-Disposition",
                        format!("attachment; filename=\"{}\"", raw.filename),
                    )
                    .body(raw.bytes.clone());
            }
            if let Some(timeout) = request.timeout {
                req_builder = req_builder.timeout(timeout);
            }

            tracing::debug!(method = %request.method, %url, attempt = attempts, "dispatching request");

            let res = match req_builder.send().await {
                Ok(res) => res,
                Err(source) => {
                    // The request may or may not have reached the server, so
                    // only methods safe to repeat are re-sent.
                    let retryable =
                        request.method.is_idempotent() || request.retry_non_idempotent;
                    if retryable && attempts < max_attempts {
                        let delay = Self::backoff_delay(attempts);
                        tracing::warn!(
                            error = %source,
                            attempt = attempts,
                            delay_ms = delay.as_millis() as u64,
                            "transport failure, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(Error::Transport { attempts, source });
                }
            };

            let status = res.status().as_u16();
            let headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();
            let body = if body_text.is_empty() {
                serde_json::Value::Null
            } else {
                serde_json::from_str(&body_text)
                    .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
            };

            let response = WpResponse::new(status, headers, body);

            if response.is_ok() {
                return Ok(response);
            }

            let (code, message) = parse_error_body(&response.body);

            match status {
                401 | 403 => {
                    if !refreshed {
                        refreshed = true;
                        let retry = self
                            .auth
                            .refresh(&self.client, self.config.site_url(), generation)
                            .await?;
                        if retry {
                            // The refreshed retry replaces the rejected
                            // attempt; it does not consume the ceiling.
                            attempts -= 1;
                            continue;
                        }
                    }
                    return Err(Error::AuthenticationRejected {
                        status,
                        message: message
                            .unwrap_or_else(|| "credentials rejected".to_string()),
                        code,
                    });
                }
                404 => {
                    return Err(Error::NotFound {
                        message: message
                            .unwrap_or_else(|| "resource not found".to_string()),
                        code,
                    });
                }
                429 | 500..=599 => {
                    if attempts < max_attempts {
                        let delay = if status == 429 {
                            // A malformed or hostile header must not panic
                            // the engine or pick the sleep for us.
                            response
                                .retry_after
                                .and_then(|seconds| Duration::try_from_secs_f64(seconds).ok())
                                .map_or_else(
                                    || Self::backoff_delay(attempts),
                                    |wait| wait.min(RETRY_AFTER_CAP),
                                )
                        } else {
                            Self::backoff_delay(attempts)
                        };
                        tracing::warn!(
                            status,
                            attempt = attempts,
                            delay_ms = delay.as_millis() as u64,
                            "transient server response, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(Error::TransientService {
                        status,
                        attempts,
                        message: message.unwrap_or_else(|| "service unavailable".to_string()),
                    });
                }
                _ => {
                    return Err(Error::Validation {
                        status,
                        code: code.unwrap_or_else(|| "unknown".to_string()),
                        message: message.unwrap_or_else(|| "request rejected".to_string()),
                        payload: response.body,
                    });
                }
            }
        }
    }

    /// Parses response headers into a lowercased `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Exponential backoff with jitter: base 500ms, doubled per attempt,
    /// plus up to 250ms of random jitter.
    fn backoff_delay(attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(6);
        let base = BACKOFF_BASE_MS << exponent;
        let jitter = rand::thread_rng().gen_range(0..=BACKOFF_BASE_MS / 2);
        Duration::from_millis(base + jitter)
    }
}

/// Extracts `code` and `message` from a WordPress error payload.
///
/// The standard shape is `{"code": "...", "message": "...", "data": {...}}`;
/// both fields are optional so non-standard bodies degrade gracefully.
fn parse_error_body(body: &serde_json::Value) -> (Option<String>, Option<String>) {
    let code = body
        .get("code")
        .and_then(serde_json::Value::as_str)
        .map(String::from);
    let message = body
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(String::from);
    (code, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthStrategy;

    fn test_client() -> HttpClient {
        let config = WpConfig::for_site("https://example.com").unwrap();
        let auth = CredentialContext::new(AuthStrategy::None).unwrap();
        HttpClient::new(config, auth)
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[test]
    fn test_client_exposes_config() {
        let client = test_client();
        assert_eq!(
            client.config().site_url().as_ref(),
            "https://example.com"
        );
    }

    #[test]
    fn test_backoff_grows_exponentially() {
        // With up to 250ms jitter, attempt n stays inside [base, base + 250].
        let first = HttpClient::backoff_delay(1);
        assert!(first >= Duration::from_millis(500));
        assert!(first <= Duration::from_millis(750));

        let third = HttpClient::backoff_delay(3);
        assert!(third >= Duration::from_millis(2000));
        assert!(third <= Duration::from_millis(2250));
    }

    #[test]
    fn test_backoff_exponent_is_capped() {
        let huge = HttpClient::backoff_delay(40);
        assert!(huge <= Duration::from_millis(500 * 64 + 250));
    }

    #[test]
    fn test_error_body_parsing() {
        let body = serde_json::json!({
            "code": "rest_post_invalid_id",
            "message": "Invalid post ID.",
            "data": {"status": 404}
        });
        let (code, message) = parse_error_body(&body);
        assert_eq!(code.as_deref(), Some("rest_post_invalid_id"));
        assert_eq!(message.as_deref(), Some("Invalid post ID."));

        let (code, message) = parse_error_body(&serde_json::json!("not an object"));
        assert!(code.is_none());
        assert!(message.is_none());
    }
}
