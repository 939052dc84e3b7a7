//! Configuration types for the WordPress API client.
//!
//! This module provides the resolved configuration object consumed by the
//! request engine: site URL, timeouts, and the retry ceiling.
//!
//! # Overview
//!
//! - [`WpConfig`]: the main configuration struct
//! - [`WpConfigBuilder`]: a builder for constructing [`WpConfig`] instances
//! - [`SiteUrl`]: a validated, normalized WordPress site URL
//! - [`AppPassword`]: an application password with masked debug output
//!
//! Configuration is instance-based and passed explicitly at client
//! construction; nothing is read from the environment mid-request.
//!
//! # Example
//!
//! ```rust
//! use wordpress_api::{WpConfig, SiteUrl};
//! use std::time::Duration;
//!
//! let config = WpConfig::builder()
//!     .site_url(SiteUrl::new("https://example.com").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .max_retries(5)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AppPassword, SiteUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default retry ceiling, counted in total attempts (including the first).
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Configuration for the WordPress API client.
///
/// # Thread Safety
///
/// `WpConfig` is `Clone`, `Send`, and `Sync`, making it safe to share across
/// threads and async tasks.
#[derive(Clone, Debug)]
pub struct WpConfig {
    site_url: SiteUrl,
    timeout: Duration,
    max_retries: u32,
    user_agent_prefix: Option<String>,
}

// Verify WpConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WpConfig>();
};

impl WpConfig {
    /// Creates a new builder for constructing a `WpConfig`.
    #[must_use]
    pub fn builder() -> WpConfigBuilder {
        WpConfigBuilder::new()
    }

    /// Creates a configuration with defaults for the given site.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the URL is invalid.
    pub fn for_site(url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder().site_url(SiteUrl::new(url)?).build()
    }

    /// Returns the site URL.
    #[must_use]
    pub const fn site_url(&self) -> &SiteUrl {
        &self.site_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the retry ceiling (total attempts, including the first).
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for constructing [`WpConfig`] instances.
///
/// The only required field is `site_url`.
///
/// # Defaults
///
/// - `timeout`: 30 seconds
/// - `max_retries`: 3 attempts
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct WpConfigBuilder {
    site_url: Option<SiteUrl>,
    timeout: Option<Duration>,
    max_retries: Option<u32>,
    user_agent_prefix: Option<String>,
}

impl WpConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the site URL (required).
    #[must_use]
    pub fn site_url(mut self, url: SiteUrl) -> Self {
        self.site_url = Some(url);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the retry ceiling, counted in total attempts.
    ///
    /// `max_retries(3)` means one initial attempt plus up to two retries.
    #[must_use]
    pub const fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`WpConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `site_url` is not set,
    /// or [`ConfigError::ZeroRetries`] if `max_retries` is 0.
    pub fn build(self) -> Result<WpConfig, ConfigError> {
        let site_url = self
            .site_url
            .ok_or(ConfigError::MissingRequiredField { field: "site_url" })?;

        let max_retries = self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES);
        if max_retries == 0 {
            return Err(ConfigError::ZeroRetries);
        }

        Ok(WpConfig {
            site_url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            max_retries,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_site_url() {
        let result = WpConfigBuilder::new().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "site_url" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = WpConfig::for_site("https://example.com").unwrap();

        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.max_retries(), DEFAULT_MAX_RETRIES);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_rejects_zero_retries() {
        let result = WpConfig::builder()
            .site_url(SiteUrl::new("https://example.com").unwrap())
            .max_retries(0)
            .build();
        assert!(matches!(result, Err(ConfigError::ZeroRetries)));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = WpConfig::builder()
            .site_url(SiteUrl::new("https://example.com").unwrap())
            .timeout(Duration::from_secs(5))
            .max_retries(7)
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.max_retries(), 7);
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WpConfig>();
    }
}
