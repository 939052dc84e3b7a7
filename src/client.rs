//! The async client shell.
//!
//! [`WordPress`] ties a configuration and an authentication strategy to the
//! shared request engine and hands out service facades. The shell is cheap to
//! clone; all clones share one connection pool and one credential state.

use std::sync::Arc;

use crate::auth::{AuthStrategy, CredentialContext};
use crate::clients::{HttpClient, WpRequest, WpResponse};
use crate::config::WpConfig;
use crate::error::Error;
use crate::services::{Categories, Comments, MediaLibrary, Pages, Posts, Tags, Users};

/// An async WordPress REST API client.
///
/// # Example
///
/// ```rust,no_run
/// use wordpress_api::{AppPassword, AuthStrategy, WordPress, QueryBuilder};
///
/// # async fn run() -> Result<(), wordpress_api::Error> {
/// let wp = WordPress::for_site(
///     "https://example.com",
///     AuthStrategy::app_password("admin", AppPassword::new("abcd efgh ijkl mnop")),
/// )?;
///
/// let page = wp.posts().list(QueryBuilder::new().per_page(5).build()?).await?;
/// println!("{} posts total", page.total.unwrap_or(0));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct WordPress {
    client: Arc<HttpClient>,
}

// Verify WordPress is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WordPress>();
};

impl WordPress {
    /// Creates a client from a resolved configuration and an authentication
    /// strategy.
    ///
    /// Credential material is validated here, before any network call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if the strategy's credentials are
    /// absent or malformed.
    pub fn new(config: WpConfig, auth: AuthStrategy) -> Result<Self, Error> {
        let context = CredentialContext::new(auth)?;
        Ok(Self {
            client: Arc::new(HttpClient::new(config, context)),
        })
    }

    /// Creates a client for the given site URL with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the URL is invalid, or
    /// [`Error::Authentication`] if the credentials are malformed.
    pub fn for_site(url: impl Into<String>, auth: AuthStrategy) -> Result<Self, Error> {
        Self::new(WpConfig::for_site(url)?, auth)
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &WpConfig {
        self.client.config()
    }

    /// The posts service.
    #[must_use]
    pub fn posts(&self) -> Posts {
        Posts::new(Arc::clone(&self.client))
    }

    /// The pages service.
    #[must_use]
    pub fn pages(&self) -> Pages {
        Pages::new(Arc::clone(&self.client))
    }

    /// The categories service.
    #[must_use]
    pub fn categories(&self) -> Categories {
        Categories::new(Arc::clone(&self.client))
    }

    /// The tags service.
    #[must_use]
    pub fn tags(&self) -> Tags {
        Tags::new(Arc::clone(&self.client))
    }

    /// The users service.
    #[must_use]
    pub fn users(&self) -> Users {
        Users::new(Arc::clone(&self.client))
    }

    /// The media library service.
    #[must_use]
    pub fn media(&self) -> MediaLibrary {
        MediaLibrary::new(Arc::clone(&self.client))
    }

    /// The comments service.
    #[must_use]
    pub fn comments(&self) -> Comments {
        Comments::new(Arc::clone(&self.client))
    }

    /// Sends a raw request through the engine.
    ///
    /// Escape hatch for endpoints the typed services do not model, such as
    /// custom post types or plugin routes under `/wp/v2`. The request goes
    /// through the same credential injection, retry, and classification as
    /// every typed call.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub async fn execute(&self, request: WpRequest) -> Result<WpResponse, Error> {
        self.client.execute(request).await
    }
}
