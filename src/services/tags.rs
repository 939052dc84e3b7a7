//! The tags service.

use std::sync::Arc;

use crate::clients::{HttpClient, HttpMethod, WpRequest};
use crate::error::Error;
use crate::query::{Query, QueryBuilder};
use crate::resources::{Tag, TagParams};
use crate::services::posts::encode;
use crate::services::{decode_deleted, ListPage};

/// CRUD operations on `/wp-json/wp/v2/tags`.
///
/// Like categories, tags have no trash; deletion always sends `force=true`.
#[derive(Clone, Debug)]
pub struct Tags {
    client: Arc<HttpClient>,
}

impl Tags {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Lists tags matching the query.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub async fn list(&self, query: Query) -> Result<ListPage<Tag>, Error> {
        let request = WpRequest::builder(HttpMethod::Get, "tags")
            .query(query)
            .build()?;
        let response = self.client.execute(request).await?;
        ListPage::from_response(&response)
    }

    /// Fetches a single tag by ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no tag has the given ID.
    pub async fn get(&self, id: u64) -> Result<Tag, Error> {
        let request = WpRequest::builder(HttpMethod::Get, format!("tags/{id}")).build()?;
        self.client.execute(request).await?.decode()
    }

    /// Creates a tag and returns the server's view of it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the server rejects the params.
    pub async fn create(&self, params: &TagParams) -> Result<Tag, Error> {
        let request = WpRequest::builder(HttpMethod::Post, "tags")
            .body(encode(params)?)
            .build()?;
        self.client.execute(request).await?.decode()
    }

    /// Updates the fields set in `params`, leaving the rest untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no tag has the given ID.
    pub async fn update(&self, id: u64, params: &TagParams) -> Result<Tag, Error> {
        let request = WpRequest::builder(HttpMethod::Put, format!("tags/{id}"))
            .body(encode(params)?)
            .build()?;
        self.client.execute(request).await?.decode()
    }

    /// Permanently deletes a tag and returns its last state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no tag has the given ID.
    pub async fn delete(&self, id: u64) -> Result<Tag, Error> {
        let query = QueryBuilder::new().param("force", "true").build()?;
        let request = WpRequest::builder(HttpMethod::Delete, format!("tags/{id}"))
            .query(query)
            .build()?;
        let response = self.client.execute(request).await?;
        decode_deleted(&response)
    }
}
