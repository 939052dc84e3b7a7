//! The blocking client shell.
//!
//! [`WordPress`](crate::blocking::WordPress) wraps the async client in a
//! private current-thread runtime and blocks on every call. There is no
//! second protocol implementation: each blocking method drives the exact
//! async path, so retry, refresh, and error classification behave
//! identically in both shells.
//!
//! Do not use this shell from inside an async runtime; blocking a runtime
//! thread deadlocks it. It exists for CLIs, scripts, and synchronous
//! servers.
//!
//! # Example
//!
//! ```rust,no_run
//! use wordpress_api::blocking::WordPress;
//! use wordpress_api::{AuthStrategy, QueryBuilder};
//!
//! # fn run() -> Result<(), wordpress_api::Error> {
//! let wp = WordPress::for_site("https://example.com", AuthStrategy::None)?;
//! let page = wp.posts().list(QueryBuilder::new().per_page(5).build()?)?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::auth::AuthStrategy;
use crate::clients::{WpRequest, WpResponse};
use crate::config::WpConfig;
use crate::error::Error;
use crate::query::Query;
use crate::resources::{
    Category, CategoryParams, Comment, CommentParams, Media, MediaParams, Page, PageParams,
    Post, PostParams, Tag, TagParams, User, UserParams,
};
use crate::services::ListPage;

/// A blocking WordPress REST API client.
///
/// Cheap to clone; clones share the engine and the runtime.
#[derive(Clone, Debug)]
pub struct WordPress {
    inner: crate::client::WordPress,
    runtime: Arc<Runtime>,
}

impl WordPress {
    /// Creates a blocking client from a resolved configuration and an
    /// authentication strategy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if the strategy's credentials are
    /// absent or malformed.
    ///
    /// # Panics
    ///
    /// Panics if the internal tokio runtime cannot be created.
    pub fn new(config: WpConfig, auth: AuthStrategy) -> Result<Self, Error> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime");

        Ok(Self {
            inner: crate::client::WordPress::new(config, auth)?,
            runtime: Arc::new(runtime),
        })
    }

    /// Creates a blocking client for the given site URL with default
    /// configuration.
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
        self.inner.config()
    }

    /// The posts service.
    #[must_use]
    pub fn posts(&self) -> Posts {
        Posts {
            inner: self.inner.posts(),
            runtime: Arc::clone(&self.runtime),
        }
    }

    /// The pages service.
    #[must_use]
    pub fn pages(&self) -> Pages {
        Pages {
            inner: self.inner.pages(),
            runtime: Arc::clone(&self.runtime),
        }
    }

    /// The categories service.
    #[must_use]
    pub fn categories(&self) -> Categories {
        Categories {
            inner: self.inner.categories(),
            runtime: Arc::clone(&self.runtime),
        }
    }

    /// The tags service.
    #[must_use]
    pub fn tags(&self) -> Tags {
        Tags {
            inner: self.inner.tags(),
            runtime: Arc::clone(&self.runtime),
        }
    }

    /// The users service.
    #[must_use]
    pub fn users(&self) -> Users {
        Users {
            inner: self.inner.users(),
            runtime: Arc::clone(&self.runtime),
        }
    }

    /// The media library service.
    #[must_use]
    pub fn media(&self) -> MediaLibrary {
        MediaLibrary {
            inner: self.inner.media(),
            runtime: Arc::clone(&self.runtime),
        }
    }

    /// The comments service.
    #[must_use]
    pub fn comments(&self) -> Comments {
        Comments {
            inner: self.inner.comments(),
            runtime: Arc::clone(&self.runtime),
        }
    }

    /// Sends a raw request through the engine, blocking until it completes.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn execute(&self, request: WpRequest) -> Result<WpResponse, Error> {
        self.runtime.block_on(self.inner.execute(request))
    }
}

/// Blocking mirror of [`Posts`](crate::services::Posts).
#[derive(Clone, Debug)]
pub struct Posts {
    inner: crate::services::Posts,
    runtime: Arc<Runtime>,
}

impl Posts {
    /// See [`Posts::list`](crate::services::Posts::list).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn list(&self, query: Query) -> Result<ListPage<Post>, Error> {
        self.runtime.block_on(self.inner.list(query))
    }

    /// See [`Posts::get`](crate::services::Posts::get).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn get(&self, id: u64) -> Result<Post, Error> {
        self.runtime.block_on(self.inner.get(id))
    }

    /// See [`Posts::get_with`](crate::services::Posts::get_with).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn get_with(&self, id: u64, query: Query) -> Result<Post, Error> {
        self.runtime.block_on(self.inner.get_with(id, query))
    }

    /// See [`Posts::create`](crate::services::Posts::create).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn create(&self, params: &PostParams) -> Result<Post, Error> {
        self.runtime.block_on(self.inner.create(params))
    }

    /// See [`Posts::update`](crate::services::Posts::update).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn update(&self, id: u64, params: &PostParams) -> Result<Post, Error> {
        self.runtime.block_on(self.inner.update(id, params))
    }

    /// See [`Posts::delete`](crate::services::Posts::delete).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn delete(&self, id: u64) -> Result<Post, Error> {
        self.runtime.block_on(self.inner.delete(id))
    }

    /// See [`Posts::force_delete`](crate::services::Posts::force_delete).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn force_delete(&self, id: u64) -> Result<Post, Error> {
        self.runtime.block_on(self.inner.force_delete(id))
    }
}

/// Blocking mirror of [`Pages`](crate::services::Pages).
#[derive(Clone, Debug)]
pub struct Pages {
    inner: crate::services::Pages,
    runtime: Arc<Runtime>,
}

impl Pages {
    /// See [`Pages::list`](crate::services::Pages::list).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn list(&self, query: Query) -> Result<ListPage<Page>, Error> {
        self.runtime.block_on(self.inner.list(query))
    }

    /// See [`Pages::get`](crate::services::Pages::get).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn get(&self, id: u64) -> Result<Page, Error> {
        self.runtime.block_on(self.inner.get(id))
    }

    /// See [`Pages::get_with`](crate::services::Pages::get_with).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn get_with(&self, id: u64, query: Query) -> Result<Page, Error> {
        self.runtime.block_on(self.inner.get_with(id, query))
    }

    /// See [`Pages::create`](crate::services::Pages::create).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn create(&self, params: &PageParams) -> Result<Page, Error> {
        self.runtime.block_on(self.inner.create(params))
    }

    /// See [`Pages::update`](crate::services::Pages::update).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn update(&self, id: u64, params: &PageParams) -> Result<Page, Error> {
        self.runtime.block_on(self.inner.update(id, params))
    }

    /// See [`Pages::delete`](crate::services::Pages::delete).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn delete(&self, id: u64) -> Result<Page, Error> {
        self.runtime.block_on(self.inner.delete(id))
    }

    /// See [`Pages::force_delete`](crate::services::Pages::force_delete).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn force_delete(&self, id: u64) -> Result<Page, Error> {
        self.runtime.block_on(self.inner.force_delete(id))
    }
}

/// Blocking mirror of [`Categories`](crate::services::Categories).
#[derive(Clone, Debug)]
pub struct Categories {
    inner: crate::services::Categories,
    runtime: Arc<Runtime>,
}

impl Categories {
    /// See [`Categories::list`](crate::services::Categories::list).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn list(&self, query: Query) -> Result<ListPage<Category>, Error> {
        self.runtime.block_on(self.inner.list(query))
    }

    /// See [`Categories::get`](crate::services::Categories::get).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn get(&self, id: u64) -> Result<Category, Error> {
        self.runtime.block_on(self.inner.get(id))
    }

    /// See [`Categories::create`](crate::services::Categories::create).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn create(&self, params: &CategoryParams) -> Result<Category, Error> {
        self.runtime.block_on(self.inner.create(params))
    }

    /// See [`Categories::update`](crate::services::Categories::update).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn update(&self, id: u64, params: &CategoryParams) -> Result<Category, Error> {
        self.runtime.block_on(self.inner.update(id, params))
    }

    /// See [`Categories::delete`](crate::services::Categories::delete).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn delete(&self, id: u64) -> Result<Category, Error> {
        self.runtime.block_on(self.inner.delete(id))
    }
}

/// Blocking mirror of [`Tags`](crate::services::Tags).
#[derive(Clone, Debug)]
pub struct Tags {
    inner: crate::services::Tags,
    runtime: Arc<Runtime>,
}

impl Tags {
    /// See [`Tags::list`](crate::services::Tags::list).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn list(&self, query: Query) -> Result<ListPage<Tag>, Error> {
        self.runtime.block_on(self.inner.list(query))
    }

    /// See [`Tags::get`](crate::services::Tags::get).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn get(&self, id: u64) -> Result<Tag, Error> {
        self.runtime.block_on(self.inner.get(id))
    }

    /// See [`Tags::create`](crate::services::Tags::create).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn create(&self, params: &TagParams) -> Result<Tag, Error> {
        self.runtime.block_on(self.inner.create(params))
    }

    /// See [`Tags::update`](crate::services::Tags::update).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn update(&self, id: u64, params: &TagParams) -> Result<Tag, Error> {
        self.runtime.block_on(self.inner.update(id, params))
    }

    /// See [`Tags::delete`](crate::services::Tags::delete).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn delete(&self, id: u64) -> Result<Tag, Error> {
        self.runtime.block_on(self.inner.delete(id))
    }
}

/// Blocking mirror of [`Users`](crate::services::Users).
#[derive(Clone, Debug)]
pub struct Users {
    inner: crate::services::Users,
    runtime: Arc<Runtime>,
}

impl Users {
    /// See [`Users::list`](crate::services::Users::list).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn list(&self, query: Query) -> Result<ListPage<User>, Error> {
        self.runtime.block_on(self.inner.list(query))
    }

    /// See [`Users::get`](crate::services::Users::get).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn get(&self, id: u64) -> Result<User, Error> {
        self.runtime.block_on(self.inner.get(id))
    }

    /// See [`Users::me`](crate::services::Users::me).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn me(&self) -> Result<User, Error> {
        self.runtime.block_on(self.inner.me())
    }

    /// See [`Users::create`](crate::services::Users::create).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn create(&self, params: &UserParams) -> Result<User, Error> {
        self.runtime.block_on(self.inner.create(params))
    }

    /// See [`Users::update`](crate::services::Users::update).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn update(&self, id: u64, params: &UserParams) -> Result<User, Error> {
        self.runtime.block_on(self.inner.update(id, params))
    }

    /// See [`Users::delete`](crate::services::Users::delete).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn delete(&self, id: u64, reassign: Option<u64>) -> Result<User, Error> {
        self.runtime.block_on(self.inner.delete(id, reassign))
    }
}

/// Blocking mirror of [`MediaLibrary`](crate::services::MediaLibrary).
#[derive(Clone, Debug)]
pub struct MediaLibrary {
    inner: crate::services::MediaLibrary,
    runtime: Arc<Runtime>,
}

impl MediaLibrary {
    /// See [`MediaLibrary::list`](crate::services::MediaLibrary::list).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn list(&self, query: Query) -> Result<ListPage<Media>, Error> {
        self.runtime.block_on(self.inner.list(query))
    }

    /// See [`MediaLibrary::get`](crate::services::MediaLibrary::get).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn get(&self, id: u64) -> Result<Media, Error> {
        self.runtime.block_on(self.inner.get(id))
    }

    /// See [`MediaLibrary::upload_from_bytes`](crate::services::MediaLibrary::upload_from_bytes).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn upload_from_bytes(
        &self,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Media, Error> {
        self.runtime
            .block_on(self.inner.upload_from_bytes(filename, content_type, bytes))
    }

    /// See [`MediaLibrary::update`](crate::services::MediaLibrary::update).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn update(&self, id: u64, params: &MediaParams) -> Result<Media, Error> {
        self.runtime.block_on(self.inner.update(id, params))
    }

    /// See [`MediaLibrary::delete`](crate::services::MediaLibrary::delete).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn delete(&self, id: u64) -> Result<Media, Error> {
        self.runtime.block_on(self.inner.delete(id))
    }
}

/// Blocking mirror of [`Comments`](crate::services::Comments).
#[derive(Clone, Debug)]
pub struct Comments {
    inner: crate::services::Comments,
    runtime: Arc<Runtime>,
}

impl Comments {
    /// See [`Comments::list`](crate::services::Comments::list).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn list(&self, query: Query) -> Result<ListPage<Comment>, Error> {
        self.runtime.block_on(self.inner.list(query))
    }

    /// See [`Comments::list_for_post`](crate::services::Comments::list_for_post).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn list_for_post(&self, post: u64) -> Result<ListPage<Comment>, Error> {
        self.runtime.block_on(self.inner.list_for_post(post))
    }

    /// See [`Comments::get`](crate::services::Comments::get).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn get(&self, id: u64) -> Result<Comment, Error> {
        self.runtime.block_on(self.inner.get(id))
    }

    /// See [`Comments::create`](crate::services::Comments::create).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn create(&self, params: &CommentParams) -> Result<Comment, Error> {
        self.runtime.block_on(self.inner.create(params))
    }

    /// See [`Comments::update`](crate::services::Comments::update).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn update(&self, id: u64, params: &CommentParams) -> Result<Comment, Error> {
        self.runtime.block_on(self.inner.update(id, params))
    }

    /// See [`Comments::delete`](crate::services::Comments::delete).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn delete(&self, id: u64) -> Result<Comment, Error> {
        self.runtime.block_on(self.inner.delete(id))
    }

    /// See [`Comments::force_delete`](crate::services::Comments::force_delete).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub fn force_delete(&self, id: u64) -> Result<Comment, Error> {
        self.runtime.block_on(self.inner.force_delete(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocking_client_construction() {
        let wp = WordPress::for_site("https://example.com", AuthStrategy::None).unwrap();
        assert_eq!(wp.config().site_url().as_ref(), "https://example.com");
    }

    #[test]
    fn test_blocking_client_validates_credentials() {
        let result = WordPress::for_site("https://example.com", AuthStrategy::jwt(""));
        assert!(matches!(result, Err(Error::Authentication { .. })));
    }
}
