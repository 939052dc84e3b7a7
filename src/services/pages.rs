//! The pages service.

use std::sync::Arc;

use crate::clients::{HttpClient, HttpMethod, WpRequest};
use crate::error::Error;
use crate::query::{Query, QueryBuilder};
use crate::resources::{Page, PageParams};
use crate::services::posts::encode;
use crate::services::{decode_deleted, ListPage};

/// CRUD operations on `/wp-json/wp/v2/pages`.
#[derive(Clone, Debug)]
pub struct Pages {
    client: Arc<HttpClient>,
}

impl Pages {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Lists pages matching the query.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub async fn list(&self, query: Query) -> Result<ListPage<Page>, Error> {
        let request = WpRequest::builder(HttpMethod::Get, "pages")
            .query(query)
            .build()?;
        let response = self.client.execute(request).await?;
        ListPage::from_response(&response)
    }

    /// Fetches a single page by ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no page has the given ID.
    pub async fn get(&self, id: u64) -> Result<Page, Error> {
        self.get_with(id, Query::none()).await
    }

    /// Fetches a single page with extra query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no page has the given ID.
    pub async fn get_with(&self, id: u64, query: Query) -> Result<Page, Error> {
        let request = WpRequest::builder(HttpMethod::Get, format!("pages/{id}"))
            .query(query)
            .build()?;
        self.client.execute(request).await?.decode()
    }

    /// Creates a page and returns the server's view of it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the server rejects the params.
    pub async fn create(&self, params: &PageParams) -> Result<Page, Error> {
        let request = WpRequest::builder(HttpMethod::Post, "pages")
            .body(encode(params)?)
            .build()?;
        self.client.execute(request).await?.decode()
    }

    /// Updates the fields set in `params`, leaving the rest untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no page has the given ID, or
    /// [`Error::Validation`] if the server rejects the params.
    pub async fn update(&self, id: u64, params: &PageParams) -> Result<Page, Error> {
        let request = WpRequest::builder(HttpMethod::Put, format!("pages/{id}"))
            .body(encode(params)?)
            .build()?;
        self.client.execute(request).await?.decode()
    }

    /// Moves a page to the trash and returns its trashed state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no page has the given ID.
    pub async fn delete(&self, id: u64) -> Result<Page, Error> {
        let request = WpRequest::builder(HttpMethod::Delete, format!("pages/{id}")).build()?;
        self.client.execute(request).await?.decode()
    }

    /// Permanently deletes a page, bypassing the trash, and returns its last
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no page has the given ID.
    pub async fn force_delete(&self, id: u64) -> Result<Page, Error> {
        let query = QueryBuilder::new().param("force", "true").build()?;
        let request = WpRequest::builder(HttpMethod::Delete, format!("pages/{id}"))
            .query(query)
            .build()?;
        let response = self.client.execute(request).await?;
        decode_deleted(&response)
    }
}
