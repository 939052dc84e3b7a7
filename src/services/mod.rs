//! Service facades over the request engine.
//!
//! Each facade binds one REST endpoint family (`posts`, `pages`, ...) to its
//! typed models and exposes the CRUD surface WordPress offers for it. The
//! facades hold no state of their own; every call goes straight through the
//! shared [`HttpClient`](crate::clients::HttpClient).

use serde::de::DeserializeOwned;

use crate::clients::WpResponse;
use crate::error::Error;

pub mod categories;
pub mod comments;
pub mod media;
pub mod pages;
pub mod posts;
pub mod tags;
pub mod users;

pub use categories::Categories;
pub use comments::Comments;
pub use media::MediaLibrary;
pub use pages::Pages;
pub use posts::Posts;
pub use tags::Tags;
pub use users::Users;

/// One page of a list result, with the totals WordPress reports in the
/// `X-WP-Total` and `X-WP-TotalPages` headers.
#[derive(Clone, Debug)]
pub struct ListPage<T> {
    /// The decoded items on this page.
    pub items: Vec<T>,
    /// Total matching items across all pages, if the server reported it.
    pub total: Option<u64>,
    /// Total pages at the requested page size, if the server reported it.
    pub total_pages: Option<u64>,
}

impl<T: DeserializeOwned> ListPage<T> {
    pub(crate) fn from_response(response: &WpResponse) -> Result<Self, Error> {
        Ok(Self {
            items: response.decode_list()?,
            total: response.total,
            total_pages: response.total_pages,
        })
    }
}

/// Decodes a forced-delete response.
///
/// With `force=true` WordPress responds `{"deleted": true, "previous": {...}}`
/// rather than the resource itself; the `previous` snapshot is what callers
/// want back.
pub(crate) fn decode_deleted<T: DeserializeOwned>(response: &WpResponse) -> Result<T, Error> {
    match response.body.get("previous") {
        Some(previous) => serde_json::from_value(previous.clone()).map_err(|e| Error::Decode {
            message: e.to_string(),
        }),
        None => response.decode(),
    }
}
