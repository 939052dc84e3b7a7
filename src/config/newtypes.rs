//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated and normalized WordPress site URL.
///
/// Normalization rules:
///
/// - a missing scheme defaults to `https://`
/// - trailing slashes are stripped
/// - the URL must contain a host
///
/// # Example
///
/// ```rust
/// use wordpress_api::SiteUrl;
///
/// let url = SiteUrl::new("example.com").unwrap();
/// assert_eq!(url.as_ref(), "https://example.com");
///
/// let url = SiteUrl::new("http://blog.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "http://blog.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteUrl(String);

impl SiteUrl {
    /// Creates a new validated site URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySiteUrl`] if the URL is empty, or
    /// [`ConfigError::InvalidSiteUrl`] if it has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim();

        if url.is_empty() {
            return Err(ConfigError::EmptySiteUrl);
        }

        let normalized = if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("https://{url}")
        };
        let normalized = normalized.trim_end_matches('/').to_string();

        // There must be a non-empty host after the scheme.
        let host_part = normalized
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or_default();
        let host = host_part.split('/').next().unwrap_or_default();
        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidSiteUrl {
                url: url.to_string(),
            });
        }

        Ok(Self(normalized))
    }

    /// Returns the REST API root for this site (`<site>/wp-json/wp/v2`).
    #[must_use]
    pub fn api_root(&self) -> String {
        format!("{}/wp-json/wp/v2", self.0)
    }

    /// Joins an endpoint path onto the API root.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.api_root(), endpoint.trim_start_matches('/'))
    }

    /// Joins an absolute route (outside `/wp/v2`) onto the site URL.
    ///
    /// Used for pre-flight exchanges such as the JWT login endpoint.
    #[must_use]
    pub fn route_url(&self, route: &str) -> String {
        format!("{}/{}", self.0, route.trim_start_matches('/'))
    }
}

impl AsRef<str> for SiteUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A WordPress application password.
///
/// Application passwords are the recommended credential for server-to-server
/// API access. This newtype masks its value in debug output to prevent
/// accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use wordpress_api::AppPassword;
///
/// let password = AppPassword::new("abcd EFGH 1234 ijkl mnop qrst");
/// assert_eq!(format!("{:?}", password), "AppPassword(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AppPassword(String);

impl AppPassword {
    /// Creates a new application password.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// Returns `true` if the password is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for AppPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AppPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppPassword(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_url_defaults_to_https() {
        let url = SiteUrl::new("example.com").unwrap();
        assert_eq!(url.as_ref(), "https://example.com");
    }

    #[test]
    fn test_site_url_keeps_explicit_http() {
        let url = SiteUrl::new("http://localhost:8080").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8080");
    }

    #[test]
    fn test_site_url_strips_trailing_slash() {
        let url = SiteUrl::new("https://example.com/").unwrap();
        assert_eq!(url.as_ref(), "https://example.com");
    }

    #[test]
    fn test_site_url_rejects_empty() {
        assert!(matches!(SiteUrl::new(""), Err(ConfigError::EmptySiteUrl)));
        assert!(matches!(
            SiteUrl::new("   "),
            Err(ConfigError::EmptySiteUrl)
        ));
    }

    #[test]
    fn test_site_url_rejects_missing_host() {
        assert!(matches!(
            SiteUrl::new("https:///path"),
            Err(ConfigError::InvalidSiteUrl { .. })
        ));
        assert!(matches!(
            SiteUrl::new("https://bad host.com"),
            Err(ConfigError::InvalidSiteUrl { .. })
        ));
    }

    #[test]
    fn test_api_root_construction() {
        let url = SiteUrl::new("https://example.com").unwrap();
        assert_eq!(url.api_root(), "https://example.com/wp-json/wp/v2");
        assert_eq!(
            url.endpoint_url("posts/42"),
            "https://example.com/wp-json/wp/v2/posts/42"
        );
        assert_eq!(
            url.route_url("/wp-json/jwt-auth/v1/token"),
            "https://example.com/wp-json/jwt-auth/v1/token"
        );
    }

    #[test]
    fn test_app_password_debug_is_masked() {
        let password = AppPassword::new("super secret");
        assert_eq!(format!("{password:?}"), "AppPassword(*****)");
        assert_eq!(password.as_ref(), "super secret");
    }
}
