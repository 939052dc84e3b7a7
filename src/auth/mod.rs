//! Authentication strategies for the WordPress REST API.
//!
//! WordPress supports several authorization mechanisms; this module models
//! them as a tagged-variant [`AuthStrategy`] enum rather than an inheritance
//! chain. Each variant knows how to produce the header material for a request
//! ([`Credentials`]), whether it needs a pre-flight exchange, and whether it
//! can be refreshed after a server-side rejection.
//!
//! Strategy capabilities:
//!
//! | Variant | Pre-flight | Refresh on 401 |
//! |---|---|---|
//! | [`None`](AuthStrategy::None) | no | no |
//! | [`AppPassword`](AuthStrategy::AppPassword) | no | no |
//! | [`Basic`](AuthStrategy::Basic) | no | no |
//! | [`Jwt`](AuthStrategy::Jwt) | no | no |
//! | [`JwtLogin`](AuthStrategy::JwtLogin) | yes (login exchange) | yes (re-login) |
//! | [`CookieNonce`](AuthStrategy::CookieNonce) | yes unless a nonce is supplied | yes (nonce re-fetch) |
//!
//! # Example
//!
//! ```rust
//! use wordpress_api::{AuthStrategy, AppPassword};
//!
//! let auth = AuthStrategy::app_password("admin", AppPassword::new("abcd efgh ijkl"));
//! assert!(auth.validate().is_ok());
//! assert!(!auth.supports_refresh());
//! ```

mod context;

pub use context::CredentialContext;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::config::AppPassword;
use crate::error::Error;

/// Credential material produced by an [`AuthStrategy`] for one request.
///
/// An opaque bundle of headers; the request engine injects them verbatim
/// before dispatching the HTTP exchange.
#[derive(Clone, Debug, Default)]
pub struct Credentials {
    headers: Vec<(&'static str, String)>,
}

impl Credentials {
    fn header(mut self, name: &'static str, value: String) -> Self {
        self.headers.push((name, value));
        self
    }

    /// Returns the headers to inject into the request.
    #[must_use]
    pub fn headers(&self) -> &[(&'static str, String)] {
        &self.headers
    }
}

/// An authentication strategy for the WordPress REST API.
///
/// Construct via the helper constructors ([`app_password`](Self::app_password),
/// [`basic`](Self::basic), [`jwt`](Self::jwt), [`jwt_login`](Self::jwt_login),
/// [`cookie_nonce`](Self::cookie_nonce)) or build the variants directly.
#[derive(Clone, Debug)]
pub enum AuthStrategy {
    /// No authentication; read-only access to public content.
    None,

    /// An application-scoped password (recommended for API access).
    ///
    /// Sent as an HTTP Basic `Authorization` header.
    AppPassword {
        /// WordPress username.
        username: String,
        /// The application password issued for this client.
        password: AppPassword,
    },

    /// Plain username/password Basic authentication.
    ///
    /// Requires the site to accept Basic auth for the REST API (typically a
    /// plugin); prefer [`AppPassword`](Self::AppPassword) in production.
    Basic {
        /// WordPress username.
        username: String,
        /// Account password.
        password: String,
    },

    /// A pre-obtained JWT bearer token.
    ///
    /// The token is treated as opaque and never renewed; a server-side
    /// rejection surfaces immediately as
    /// [`Error::AuthenticationRejected`].
    Jwt {
        /// The bearer token.
        token: String,
    },

    /// JWT with a login exchange against the site's JWT plugin endpoint
    /// (`/wp-json/jwt-auth/v1/token`).
    ///
    /// The token is fetched once before the first request, cached in the
    /// [`CredentialContext`], and re-fetched at most once per logical request
    /// when the server responds 401.
    JwtLogin {
        /// WordPress username.
        username: String,
        /// Account password.
        password: String,
    },

    /// Session cookie plus REST nonce, for requests made on behalf of a
    /// logged-in browser session.
    ///
    /// If `nonce` is `None` it is fetched once via
    /// `/wp-admin/admin-ajax.php?action=rest-nonce` using the cookies, and
    /// re-fetched at most once when the server rejects it.
    CookieNonce {
        /// The nonce to send in `X-WP-Nonce`, if already known.
        nonce: Option<String>,
        /// Session cookies as name/value pairs.
        cookies: Vec<(String, String)>,
    },
}

impl AuthStrategy {
    /// Creates an application-password strategy.
    #[must_use]
    pub fn app_password(username: impl Into<String>, password: AppPassword) -> Self {
        Self::AppPassword {
            username: username.into(),
            password,
        }
    }

    /// Creates a Basic auth strategy.
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates a strategy around a pre-obtained JWT token.
    #[must_use]
    pub fn jwt(token: impl Into<String>) -> Self {
        Self::Jwt {
            token: token.into(),
        }
    }

    /// Creates a JWT strategy that logs in to obtain its token.
    #[must_use]
    pub fn jwt_login(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::JwtLogin {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates a cookie + nonce strategy.
    #[must_use]
    pub fn cookie_nonce(nonce: Option<String>, cookies: Vec<(String, String)>) -> Self {
        Self::CookieNonce { nonce, cookies }
    }

    /// Validates credential material before any network call is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] when credentials are absent or
    /// malformed, so misconfiguration fails fast at client construction.
    pub fn validate(&self) -> Result<(), Error> {
        let problem = match self {
            Self::None => None,
            Self::AppPassword { username, password } => {
                if username.is_empty() {
                    Some("application-password auth requires a username")
                } else if password.is_empty() {
                    Some("application-password auth requires a non-empty password")
                } else {
                    None
                }
            }
            Self::Basic { username, password } => {
                if username.is_empty() || password.is_empty() {
                    Some("basic auth requires both username and password")
                } else {
                    None
                }
            }
            Self::Jwt { token } => {
                if token.is_empty() {
                    Some("JWT auth requires a non-empty token")
                } else {
                    None
                }
            }
            Self::JwtLogin { username, password } => {
                if username.is_empty() || password.is_empty() {
                    Some("JWT login requires both username and password")
                } else {
                    None
                }
            }
            Self::CookieNonce { nonce, cookies } => {
                if cookies.is_empty() {
                    Some("cookie auth requires at least one session cookie")
                } else if nonce.as_deref() == Some("") {
                    Some("cookie auth nonce must not be empty when supplied")
                } else {
                    None
                }
            }
        };

        match problem {
            Some(message) => Err(Error::Authentication {
                message: message.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Returns `true` if this strategy needs an exchange before the first
    /// authenticated request.
    #[must_use]
    pub const fn requires_preflight(&self) -> bool {
        matches!(
            self,
            Self::JwtLogin { .. } | Self::CookieNonce { nonce: None, .. }
        )
    }

    /// Returns `true` if this strategy can refresh its credentials after a
    /// server-side rejection.
    #[must_use]
    pub const fn supports_refresh(&self) -> bool {
        matches!(self, Self::JwtLogin { .. } | Self::CookieNonce { .. })
    }

    /// Produces the credential headers for one request.
    ///
    /// `cached_token` is the bearer token or nonce currently held by the
    /// [`CredentialContext`], for the variants that cache one.
    pub(crate) fn credentials(&self, cached_token: Option<&str>) -> Credentials {
        match self {
            Self::None => Credentials::default(),
            Self::AppPassword { username, password } => {
                basic_header(username, password.as_ref())
            }
            Self::Basic { username, password } => basic_header(username, password),
            Self::Jwt { token } => {
                Credentials::default().header("Authorization", format!("Bearer {token}"))
            }
            Self::JwtLogin { .. } => match cached_token {
                Some(token) => {
                    Credentials::default().header("Authorization", format!("Bearer {token}"))
                }
                None => Credentials::default(),
            },
            Self::CookieNonce { nonce, cookies } => {
                let mut credentials = Credentials::default();
                let effective_nonce = cached_token.or(nonce.as_deref());
                if let Some(nonce) = effective_nonce {
                    credentials = credentials.header("X-WP-Nonce", nonce.to_string());
                }
                if !cookies.is_empty() {
                    credentials = credentials.header("Cookie", cookie_header(cookies));
                }
                credentials
            }
        }
    }
}

fn basic_header(username: &str, password: &str) -> Credentials {
    let encoded = BASE64.encode(format!("{username}:{password}"));
    Credentials::default().header("Authorization", format!("Basic {encoded}"))
}

fn cookie_header(cookies: &[(String, String)]) -> String {
    cookies
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ")
}
