//! The media library service.

use std::sync::Arc;

use crate::clients::{HttpClient, HttpMethod, WpRequest};
use crate::error::Error;
use crate::query::{Query, QueryBuilder};
use crate::resources::{Media, MediaParams};
use crate::services::posts::encode;
use crate::services::{decode_deleted, ListPage};

/// Operations on `/wp-json/wp/v2/media`.
///
/// Covers listing, reading, uploading, metadata updates, and deletion of
/// attachments.
#[derive(Clone, Debug)]
pub struct MediaLibrary {
    client: Arc<HttpClient>,
}

impl MediaLibrary {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Lists attachments matching the query.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub async fn list(&self, query: Query) -> Result<ListPage<Media>, Error> {
        let request = WpRequest::builder(HttpMethod::Get, "media")
            .query(query)
            .build()?;
        let response = self.client.execute(request).await?;
        ListPage::from_response(&response)
    }

    /// Fetches a single attachment by ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no attachment has the given ID.
    pub async fn get(&self, id: u64) -> Result<Media, Error> {
        let request = WpRequest::builder(HttpMethod::Get, format!("media/{id}")).build()?;
        self.client.execute(request).await?.decode()
    }

    /// Uploads a file from an in-memory byte buffer and returns the created
    /// attachment.
    ///
    /// WordPress sideloads the raw request body and takes the target file
    /// name from the `Content-Disposition` header. Fields such as the title
    /// or alt text are set afterwards with [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the server rejects the file type or
    /// content.
    pub async fn upload_from_bytes(
        &self,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Media, Error> {
        let request = WpRequest::builder(HttpMethod::Post, "media")
            .raw_body(filename, content_type, bytes)
            .build()?;
        self.client.execute(request).await?.decode()
    }

    /// Updates the metadata fields set in `params`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no attachment has the given ID.
    pub async fn update(&self, id: u64, params: &MediaParams) -> Result<Media, Error> {
        let request = WpRequest::builder(HttpMethod::Put, format!("media/{id}"))
            .body(encode(params)?)
            .build()?;
        self.client.execute(request).await?.decode()
    }

    /// Permanently deletes an attachment and returns its last state.
    ///
    /// Attachments have no trash by default; the server requires
    /// `force=true`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no attachment has the given ID.
    pub async fn delete(&self, id: u64) -> Result<Media, Error> {
        let query = QueryBuilder::new().param("force", "true").build()?;
        let request = WpRequest::builder(HttpMethod::Delete, format!("media/{id}"))
            .query(query)
            .build()?;
        let response = self.client.execute(request).await?;
        decode_deleted(&response)
    }
}
