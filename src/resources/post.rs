//! Post resource models.
//!
//! [`Post`] is the full read model returned by the API; [`PostParams`] is the
//! partial write payload for create/update calls. Unset fields are omitted
//! from the encoded payload entirely, so an update only touches the fields
//! the caller intends to change.
//!
//! # Example
//!
//! ```rust
//! use wordpress_api::{PostParams, PostStatus};
//!
//! let params = PostParams {
//!     title: Some("Hello world".to_string()),
//!     status: Some(PostStatus::Publish),
//!     ..Default::default()
//! };
//!
//! let json = serde_json::to_value(&params).unwrap();
//! assert_eq!(json, serde_json::json!({"title": "Hello world", "status": "publish"}));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resources::common::{
    CommentStatus, PingStatus, PostFormat, PostStatus, Rendered,
};

/// A WordPress post as returned by the API.
///
/// Field presence is governed by the request context (view/embed/edit);
/// everything except `id` is optional. Unknown fields in the response are
/// ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct Post {
    /// Unique post identifier.
    pub id: u64,
    /// Publication date in the site's timezone.
    pub date: Option<NaiveDateTime>,
    /// Publication date in UTC.
    pub date_gmt: Option<NaiveDateTime>,
    /// Last modification date in the site's timezone.
    pub modified: Option<NaiveDateTime>,
    /// Last modification date in UTC.
    pub modified_gmt: Option<NaiveDateTime>,
    /// URL-friendly slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Publication status.
    #[serde(default)]
    pub status: Option<PostStatus>,
    /// Post type (normally `post`).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Permalink.
    #[serde(default)]
    pub link: Option<String>,
    /// Post title.
    #[serde(default)]
    pub title: Option<Rendered>,
    /// Post body.
    #[serde(default)]
    pub content: Option<Rendered>,
    /// Post excerpt.
    #[serde(default)]
    pub excerpt: Option<Rendered>,
    /// Author user ID.
    #[serde(default)]
    pub author: Option<u64>,
    /// Featured image attachment ID.
    #[serde(default)]
    pub featured_media: Option<u64>,
    /// Whether comments are open.
    #[serde(default)]
    pub comment_status: Option<CommentStatus>,
    /// Whether pings are accepted.
    #[serde(default)]
    pub ping_status: Option<PingStatus>,
    /// Whether the post is pinned to the front page.
    #[serde(default)]
    pub sticky: Option<bool>,
    /// Theme template file.
    #[serde(default)]
    pub template: Option<String>,
    /// Post format.
    #[serde(default)]
    pub format: Option<PostFormat>,
    /// Assigned category IDs.
    #[serde(default)]
    pub categories: Vec<u64>,
    /// Assigned tag IDs.
    #[serde(default)]
    pub tags: Vec<u64>,
    /// Custom fields, when exposed.
    #[serde(default, deserialize_with = "crate::resources::deserialize_meta")]
    pub meta: HashMap<String, serde_json::Value>,
}

/// Partial payload for creating or updating a post.
///
/// Every field is optional; unset fields are not serialized, so the server
/// leaves them untouched on update.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PostParams {
    /// Post title (plain text or HTML).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Post body HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Post excerpt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Publication status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    /// URL-friendly slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Author user ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<u64>,
    /// Featured image attachment ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_media: Option<u64>,
    /// Whether comments are open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_status: Option<CommentStatus>,
    /// Whether pings are accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping_status: Option<PingStatus>,
    /// Post format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<PostFormat>,
    /// Whether the post is sticky.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticky: Option<bool>,
    /// Password protecting the content, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Theme template file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Category IDs to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<u64>>,
    /// Tag IDs to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<u64>>,
    /// Publication date (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_gmt: Option<DateTime<Utc>>,
    /// Custom fields to set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, serde_json::Value>>,
}

impl PostParams {
    /// Shorthand for a draft with the given title and content.
    #[must_use]
    pub fn draft(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            status: Some(PostStatus::Draft),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_tolerates_unknown_fields() {
        let body = json!({
            "id": 42,
            "slug": "hello-world",
            "status": "publish",
            "title": {"rendered": "Hello"},
            "categories": [1, 5],
            "some_plugin_field": {"nested": true}
        });

        let post: Post = serde_json::from_value(body).unwrap();
        assert_eq!(post.id, 42);
        assert_eq!(post.status, Some(PostStatus::Publish));
        assert_eq!(post.categories, vec![1, 5]);
    }

    #[test]
    fn test_decode_requires_numeric_id() {
        let body = json!({"id": "not-a-number", "slug": "x"});
        assert!(serde_json::from_value::<Post>(body).is_err());

        let body = json!({"slug": "x"});
        assert!(serde_json::from_value::<Post>(body).is_err());
    }

    #[test]
    fn test_params_omit_unset_fields() {
        let params = PostParams {
            title: Some("Only the title".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, json!({"title": "Only the title"}));
    }

    #[test]
    fn test_draft_shorthand() {
        let params = PostParams::draft("T", "C");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            json!({"title": "T", "content": "C", "status": "draft"})
        );
    }

    #[test]
    fn test_decode_site_local_dates() {
        // WordPress emits site-local dates without a timezone suffix.
        let body = json!({
            "id": 7,
            "date": "2024-05-01T09:30:00",
            "date_gmt": "2024-05-01T07:30:00"
        });

        let post: Post = serde_json::from_value(body).unwrap();
        assert!(post.date.is_some());
        assert!(post.date_gmt.is_some());
    }
}
