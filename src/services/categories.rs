//! The categories service.

use std::sync::Arc;

use crate::clients::{HttpClient, HttpMethod, WpRequest};
use crate::error::Error;
use crate::query::{Query, QueryBuilder};
use crate::resources::{Category, CategoryParams};
use crate::services::posts::encode;
use crate::services::{decode_deleted, ListPage};

/// CRUD operations on `/wp-json/wp/v2/categories`.
///
/// Terms have no trash; deletion is always permanent, so the server requires
/// `force=true` and [`delete`](Categories::delete) sends it.
#[derive(Clone, Debug)]
pub struct Categories {
    client: Arc<HttpClient>,
}

impl Categories {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Lists categories matching the query.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub async fn list(&self, query: Query) -> Result<ListPage<Category>, Error> {
        let request = WpRequest::builder(HttpMethod::Get, "categories")
            .query(query)
            .build()?;
        let response = self.client.execute(request).await?;
        ListPage::from_response(&response)
    }

    /// Fetches a single category by ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no category has the given ID.
    pub async fn get(&self, id: u64) -> Result<Category, Error> {
        let request = WpRequest::builder(HttpMethod::Get, format!("categories/{id}")).build()?;
        self.client.execute(request).await?.decode()
    }

    /// Creates a category and returns the server's view of it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the server rejects the params, for
    /// example a duplicate name.
    pub async fn create(&self, params: &CategoryParams) -> Result<Category, Error> {
        let request = WpRequest::builder(HttpMethod::Post, "categories")
            .body(encode(params)?)
            .build()?;
        self.client.execute(request).await?.decode()
    }

    /// Updates the fields set in `params`, leaving the rest untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no category has the given ID.
    pub async fn update(&self, id: u64, params: &CategoryParams) -> Result<Category, Error> {
        let request = WpRequest::builder(HttpMethod::Put, format!("categories/{id}"))
            .body(encode(params)?)
            .build()?;
        self.client.execute(request).await?.decode()
    }

    /// Permanently deletes a category and returns its last state. Posts in
    /// the category are reassigned to the default category by the server.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no category has the given ID.
    pub async fn delete(&self, id: u64) -> Result<Category, Error> {
        let query = QueryBuilder::new().param("force", "true").build()?;
        let request = WpRequest::builder(HttpMethod::Delete, format!("categories/{id}"))
            .query(query)
            .build()?;
        let response = self.client.execute(request).await?;
        decode_deleted(&response)
    }
}
