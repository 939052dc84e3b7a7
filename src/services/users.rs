//! The users service.

use std::sync::Arc;

use crate::clients::{HttpClient, HttpMethod, WpRequest};
use crate::error::Error;
use crate::query::{Query, QueryBuilder};
use crate::resources::{User, UserParams};
use crate::services::posts::encode;
use crate::services::{decode_deleted, ListPage};

/// CRUD operations on `/wp-json/wp/v2/users`.
#[derive(Clone, Debug)]
pub struct Users {
    client: Arc<HttpClient>,
}

impl Users {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Lists users matching the query.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] per the engine's response classification.
    pub async fn list(&self, query: Query) -> Result<ListPage<User>, Error> {
        let request = WpRequest::builder(HttpMethod::Get, "users")
            .query(query)
            .build()?;
        let response = self.client.execute(request).await?;
        ListPage::from_response(&response)
    }

    /// Fetches a single user by ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no user has the given ID.
    pub async fn get(&self, id: u64) -> Result<User, Error> {
        let request = WpRequest::builder(HttpMethod::Get, format!("users/{id}")).build()?;
        self.client.execute(request).await?.decode()
    }

    /// Fetches the user the current credentials belong to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthenticationRejected`] when called without
    /// credentials.
    pub async fn me(&self) -> Result<User, Error> {
        let request = WpRequest::builder(HttpMethod::Get, "users/me").build()?;
        self.client.execute(request).await?.decode()
    }

    /// Creates a user and returns the server's view of it.
    ///
    /// The server requires `username`, `email`, and `password` on create.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the server rejects the params.
    pub async fn create(&self, params: &UserParams) -> Result<User, Error> {
        let request = WpRequest::builder(HttpMethod::Post, "users")
            .body(encode(params)?)
            .build()?;
        self.client.execute(request).await?.decode()
    }

    /// Updates the fields set in `params`, leaving the rest untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no user has the given ID.
    pub async fn update(&self, id: u64, params: &UserParams) -> Result<User, Error> {
        let request = WpRequest::builder(HttpMethod::Put, format!("users/{id}"))
            .body(encode(params)?)
            .build()?;
        self.client.execute(request).await?.decode()
    }

    /// Permanently deletes a user, reassigning their content to another
    /// user, and returns the deleted account's last state.
    ///
    /// Users have no trash; the server requires `force=true` and a
    /// `reassign` target (or an explicit `None` to delete the content).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no user has the given ID.
    pub async fn delete(&self, id: u64, reassign: Option<u64>) -> Result<User, Error> {
        let mut builder = QueryBuilder::new().param("force", "true");
        if let Some(target) = reassign {
            builder = builder.param("reassign", target.to_string());
        }
        let request = WpRequest::builder(HttpMethod::Delete, format!("users/{id}"))
            .query(builder.build()?)
            .build()?;
        let response = self.client.execute(request).await?;
        decode_deleted(&response)
    }
}
