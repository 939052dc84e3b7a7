//! The comments service.

use std::sync::Arc;

use crate::clients::{HttpClient, HttpMethod, WpRequest};
use crate::error::Error;
use crate::query::{Query, QueryBuilder};
use crate::resources::{Comment, CommentParams};
use crate::services::posts::encode;
use crate::services::{decode_deleted, ListPage};

/// CRUD operations on `/wp-json/wp/v2/comments`.
#[derive(Clone, Debug)]
pub struct Comments {
    client: Arc<HttpClient>,
}

impl Comments {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Lists comments matching the query.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub async fn list(&self, query: Query) -> Result<ListPage<Comment>, Error> {
        let request = WpRequest::builder(HttpMethod::Get, "comments")
            .query(query)
            .build()?;
        let response = self.client.execute(request).await?;
        ListPage::from_response(&response)
    }

    /// Lists comments on a single post.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub async fn list_for_post(&self, post: u64) -> Result<ListPage<Comment>, Error> {
        let query = QueryBuilder::new().param("post", post.to_string()).build()?;
        self.list(query).await
    }

    /// Fetches a single comment by ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no comment has the given ID.
    pub async fn get(&self, id: u64) -> Result<Comment, Error> {
        let request = WpRequest::builder(HttpMethod::Get, format!("comments/{id}")).build()?;
        self.client.execute(request).await?.decode()
    }

    /// Creates a comment and returns the server's view of it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the server rejects the params, for
    /// example a missing `post` reference.
    pub async fn create(&self, params: &CommentParams) -> Result<Comment, Error> {
        let request = WpRequest::builder(HttpMethod::Post, "comments")
            .body(encode(params)?)
            .build()?;
        self.client.execute(request).await?.decode()
    }

    /// Updates the fields set in `params`, leaving the rest untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no comment has the given ID.
    pub async fn update(&self, id: u64, params: &CommentParams) -> Result<Comment, Error> {
        let request = WpRequest::builder(HttpMethod::Put, format!("comments/{id}"))
            .body(encode(params)?)
            .build()?;
        self.client.execute(request).await?.decode()
    }

    /// Moves a comment to the trash and returns its trashed state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no comment has the given ID.
    pub async fn delete(&self, id: u64) -> Result<Comment, Error> {
        let request = WpRequest::builder(HttpMethod::Delete, format!("comments/{id}")).build()?;
        self.client.execute(request).await?.decode()
    }

    /// Permanently deletes a comment, bypassing the trash, and returns its
    /// last state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no comment has the given ID.
    pub async fn force_delete(&self, id: u64) -> Result<Comment, Error> {
        let query = QueryBuilder::new().param("force", "true").build()?;
        let request = WpRequest::builder(HttpMethod::Delete, format!("comments/{id}"))
            .query(query)
            .build()?;
        let response = self.client.execute(request).await?;
        decode_deleted(&response)
    }
}
