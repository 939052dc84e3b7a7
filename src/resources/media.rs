//! Media (attachment) resource models.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::resources::common::{PostStatus, Rendered};

/// A media attachment as returned by the API.
#[derive(Clone, Debug, Deserialize)]
pub struct Media {
    /// Unique attachment identifier.
    pub id: u64,
    /// Upload date in the site's timezone.
    pub date: Option<NaiveDateTime>,
    /// Upload date in UTC.
    pub date_gmt: Option<NaiveDateTime>,
    /// Last modification date in the site's timezone.
    pub modified: Option<NaiveDateTime>,
    /// Last modification date in UTC.
    pub modified_gmt: Option<NaiveDateTime>,
    /// URL-friendly slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Attachment status (normally `inherit`).
    #[serde(default)]
    pub status: Option<PostStatus>,
    /// Attachment page permalink.
    #[serde(default)]
    pub link: Option<String>,
    /// Attachment title.
    #[serde(default)]
    pub title: Option<Rendered>,
    /// Author user ID.
    #[serde(default)]
    pub author: Option<u64>,
    /// Caption shown under the media.
    #[serde(default)]
    pub caption: Option<Rendered>,
    /// Description shown on the attachment page.
    #[serde(default)]
    pub description: Option<Rendered>,
    /// Alternative text for images.
    #[serde(default)]
    pub alt_text: Option<String>,
    /// Media kind reported by the server (`image`, `file`, ...).
    #[serde(default)]
    pub media_type: Option<String>,
    /// MIME type of the underlying file.
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Direct URL of the uploaded file.
    #[serde(default)]
    pub source_url: Option<String>,
    /// Post the attachment belongs to, if any.
    #[serde(default)]
    pub post: Option<u64>,
    /// Size variants and file details, shape varies by media kind.
    #[serde(default)]
    pub media_details: Option<serde_json::Value>,
    /// Custom fields, when exposed.
    #[serde(default, deserialize_with = "crate::resources::deserialize_meta")]
    pub meta: HashMap<String, serde_json::Value>,
}

/// Partial payload for updating media metadata.
///
/// File upload itself sends the raw bytes
/// ([`MediaLibrary::upload_from_bytes`](crate::services::MediaLibrary::upload_from_bytes));
/// these params cover the JSON-editable fields of an existing attachment.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MediaParams {
    /// Attachment title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Caption shown under the media.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Description shown on the attachment page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Alternative text for images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    /// URL-friendly slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Author user ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<u64>,
    /// Post to attach the media to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<u64>,
}
