//! The posts service.

use std::sync::Arc;

use crate::clients::{HttpClient, HttpMethod, WpRequest};
use crate::error::Error;
use crate::query::{Query, QueryBuilder};
use crate::resources::{Post, PostParams};
use crate::services::{decode_deleted, ListPage};

/// CRUD operations on `/wp-json/wp/v2/posts`.
///
/// # Example
///
/// ```rust,ignore
/// use wordpress_api::{PostParams, QueryBuilder, PostStatus};
///
/// let page = wp.posts()
///     .list(QueryBuilder::new().per_page(10).status([PostStatus::Publish]).build()?)
///     .await?;
///
/// let draft = wp.posts().create(&PostParams::draft("Title", "Body")).await?;
/// ```
#[derive(Clone, Debug)]
pub struct Posts {
    client: Arc<HttpClient>,
}

impl Posts {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Lists posts matching the query.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub async fn list(&self, query: Query) -> Result<ListPage<Post>, Error> {
        let request = WpRequest::builder(HttpMethod::Get, "posts")
            .query(query)
            .build()?;
        let response = self.client.execute(request).await?;
        ListPage::from_response(&response)
    }

    /// Fetches a single post by ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no post has the given ID.
    pub async fn get(&self, id: u64) -> Result<Post, Error> {
        self.get_with(id, Query::none()).await
    }

    /// Fetches a single post with extra query parameters (e.g. an `edit`
    /// context or a content password).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no post has the given ID.
    pub async fn get_with(&self, id: u64, query: Query) -> Result<Post, Error> {
        let request = WpRequest::builder(HttpMethod::Get, format!("posts/{id}"))
            .query(query)
            .build()?;
        self.client.execute(request).await?.decode()
    }

    /// Creates a post and returns the server's view of it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the server rejects the params.
    pub async fn create(&self, params: &PostParams) -> Result<Post, Error> {
        let request = WpRequest::builder(HttpMethod::Post, "posts")
            .body(encode(params)?)
            .build()?;
        self.client.execute(request).await?.decode()
    }

    /// Updates the fields set in `params`, leaving the rest untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no post has the given ID, or
    /// [`Error::Validation`] if the server rejects the params.
    pub async fn update(&self, id: u64, params: &PostParams) -> Result<Post, Error> {
        let request = WpRequest::builder(HttpMethod::Put, format!("posts/{id}"))
            .body(encode(params)?)
            .build()?;
        self.client.execute(request).await?.decode()
    }

    /// Moves a post to the trash and returns its trashed state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no post has the given ID.
    pub async fn delete(&self, id: u64) -> Result<Post, Error> {
        let request = WpRequest::builder(HttpMethod::Delete, format!("posts/{id}")).build()?;
        self.client.execute(request).await?.decode()
    }

    /// Permanently deletes a post, bypassing the trash, and returns its last
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no post has the given ID.
    pub async fn force_delete(&self, id: u64) -> Result<Post, Error> {
        let query = QueryBuilder::new().param("force", "true").build()?;
        let request = WpRequest::builder(HttpMethod::Delete, format!("posts/{id}"))
            .query(query)
            .build()?;
        let response = self.client.execute(request).await?;
        decode_deleted(&response)
    }
}

pub(crate) fn encode<T: serde::Serialize>(params: &T) -> Result<serde_json::Value, Error> {
    serde_json::to_value(params).map_err(|e| Error::InvalidRequest {
        message: e.to_string(),
    })
}
