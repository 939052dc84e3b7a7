//! Per-client credential state with single-flight refresh.
//!
//! The [`CredentialContext`] owns the mutable part of an authentication
//! strategy: the cached JWT token or REST nonce, and a generation counter.
//! Many in-flight requests may race into a 401 at the same time; the
//! generation counter plus a `tokio` mutex guarantee that the refresh
//! exchange runs at most once per rejection.

use serde::Deserialize;
use tokio::sync::Mutex;

use crate::auth::{AuthStrategy, Credentials};
use crate::config::SiteUrl;
use crate::error::Error;

/// Route of the JWT plugin's login endpoint, relative to the site root.
const JWT_LOGIN_ROUTE: &str = "wp-json/jwt-auth/v1/token";

/// Route that returns a fresh REST nonce for a cookie session.
const NONCE_ROUTE: &str = "wp-admin/admin-ajax.php";

#[derive(Debug, Default)]
struct TokenState {
    /// Bumped on every successful refresh. Callers that observed an older
    /// generation know someone else already refreshed and simply retry.
    generation: u64,
    /// Cached bearer token (JWT login) or nonce (cookie auth).
    token: Option<String>,
}

/// Response body of the JWT plugin's token endpoint.
#[derive(Debug, Deserialize)]
struct JwtLoginResponse {
    token: String,
}

/// Mutable credential bundle owned by one client instance.
///
/// Created at client construction, mutated only by the pre-flight and
/// refresh paths, and dropped with the client. Safe to share across
/// concurrent requests behind an `Arc`.
#[derive(Debug)]
pub struct CredentialContext {
    strategy: AuthStrategy,
    state: Mutex<TokenState>,
}

impl CredentialContext {
    /// Creates a context for the given strategy, validating credentials
    /// fail-fast.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if the strategy's credential
    /// material is absent or malformed.
    pub fn new(strategy: AuthStrategy) -> Result<Self, Error> {
        strategy.validate()?;
        Ok(Self {
            strategy,
            state: Mutex::new(TokenState::default()),
        })
    }

    /// Returns the strategy this context was built from.
    #[must_use]
    pub const fn strategy(&self) -> &AuthStrategy {
        &self.strategy
    }

    /// Produces credentials for one request, running the pre-flight exchange
    /// on first use.
    ///
    /// Returns the credential headers together with the generation they were
    /// derived from; the caller passes that generation back to
    /// [`refresh`](Self::refresh) if the server rejects them.
    pub(crate) async fn credentials(
        &self,
        http: &reqwest::Client,
        site: &SiteUrl,
    ) -> Result<(Credentials, u64), Error> {
        let mut state = self.state.lock().await;

        if self.strategy.requires_preflight() && state.token.is_none() {
            tracing::debug!("performing authentication pre-flight exchange");
            state.token = Some(self.exchange(http, site).await?);
        }

        let credentials = self.strategy.credentials(state.token.as_deref());
        Ok((credentials, state.generation))
    }

    /// Refreshes credentials after a server-side rejection, at most once per
    /// observed generation.
    ///
    /// Returns `Ok(true)` when the caller should retry (either this call
    /// refreshed, or a concurrent caller already did), `Ok(false)` when the
    /// strategy cannot refresh.
    pub(crate) async fn refresh(
        &self,
        http: &reqwest::Client,
        site: &SiteUrl,
        observed_generation: u64,
    ) -> Result<bool, Error> {
        let mut state = self.state.lock().await;

        // A concurrent request already refreshed; retry with the new token.
        if state.generation != observed_generation {
            return Ok(true);
        }

        if !self.strategy.supports_refresh() {
            return Ok(false);
        }

        tracing::warn!("credentials rejected by server, refreshing");
        state.token = Some(self.exchange(http, site).await?);
        state.generation += 1;
        Ok(true)
    }

    /// Runs the strategy's credential exchange (JWT login or nonce fetch).
    async fn exchange(&self, http: &reqwest::Client, site: &SiteUrl) -> Result<String, Error> {
        match &self.strategy {
            AuthStrategy::JwtLogin { username, password } => {
                jwt_login(http, site, username, password).await
            }
            AuthStrategy::CookieNonce { cookies, .. } => fetch_nonce(http, site, cookies).await,
            // requires_preflight/supports_refresh gate the other variants out.
            _ => Err(Error::Authentication {
                message: "strategy does not support credential exchange".to_string(),
            }),
        }
    }
}

async fn jwt_login(
    http: &reqwest::Client,
    site: &SiteUrl,
    username: &str,
    password: &str,
) -> Result<String, Error> {
    let response = http
        .post(site.route_url(JWT_LOGIN_ROUTE))
        .json(&serde_json::json!({ "username": username, "password": password }))
        .send()
        .await
        .map_err(|source| Error::Transport {
            attempts: 1,
            source,
        })?;

    let status = response.status().as_u16();
    let body: serde_json::Value = response.json().await.unwrap_or_default();

    if !(200..300).contains(&status) {
        return Err(Error::AuthenticationRejected {
            status,
            message: body
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("JWT login failed")
                .to_string(),
            code: body
                .get("code")
                .and_then(serde_json::Value::as_str)
                .map(String::from),
        });
    }

    let login: JwtLoginResponse =
        serde_json::from_value(body).map_err(|e| Error::Decode {
            message: format!("JWT login response missing token: {e}"),
        })?;
    Ok(login.token)
}

async fn fetch_nonce(
    http: &reqwest::Client,
    site: &SiteUrl,
    cookies: &[(String, String)],
) -> Result<String, Error> {
    let cookie_header = cookies
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ");

    let response = http
        .get(site.route_url(NONCE_ROUTE))
        .query(&[("action", "rest-nonce")])
        .header("Cookie", cookie_header)
        .send()
        .await
        .map_err(|source| Error::Transport {
            attempts: 1,
            source,
        })?;

    let status = response.status().as_u16();
    let nonce = response.text().await.unwrap_or_default();
    let nonce = nonce.trim();

    if !(200..300).contains(&status) || nonce.is_empty() || nonce == "0" {
        return Err(Error::AuthenticationRejected {
            status,
            message: "nonce endpoint rejected the session cookies".to_string(),
            code: None,
        });
    }

    Ok(nonce.to_string())
}
