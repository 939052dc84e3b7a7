//! Comment resource models.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::resources::common::Rendered;

/// A comment as returned by the API.
#[derive(Clone, Debug, Deserialize)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: u64,
    /// Post the comment belongs to.
    #[serde(default)]
    pub post: Option<u64>,
    /// Parent comment ID (0 for top-level comments).
    #[serde(default)]
    pub parent: Option<u64>,
    /// Commenting user ID (0 for anonymous comments).
    #[serde(default)]
    pub author: Option<u64>,
    /// Display name supplied by the commenter.
    #[serde(default)]
    pub author_name: Option<String>,
    /// Commenter email (edit context only).
    #[serde(default)]
    pub author_email: Option<String>,
    /// Commenter website URL.
    #[serde(default)]
    pub author_url: Option<String>,
    /// Submission date in the site's timezone.
    pub date: Option<NaiveDateTime>,
    /// Submission date in UTC.
    pub date_gmt: Option<NaiveDateTime>,
    /// Comment body.
    #[serde(default)]
    pub content: Option<Rendered>,
    /// Permalink.
    #[serde(default)]
    pub link: Option<String>,
    /// Moderation state (`approved`, `hold`, `spam`, `trash`).
    #[serde(default)]
    pub status: Option<String>,
    /// Avatar URLs keyed by pixel size.
    #[serde(default)]
    pub author_avatar_urls: HashMap<String, String>,
    /// Custom fields, when exposed.
    #[serde(default, deserialize_with = "crate::resources::deserialize_meta")]
    pub meta: HashMap<String, serde_json::Value>,
}

/// Partial payload for creating or updating a comment.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CommentParams {
    /// Post to comment on (required by the server on create).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<u64>,
    /// Parent comment ID for threaded replies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
    /// Comment body HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Commenting user ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<u64>,
    /// Display name for anonymous comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// Email for anonymous comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    /// Website URL for anonymous comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    /// Moderation state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CommentParams {
    /// Shorthand for a reply to a post.
    #[must_use]
    pub fn on_post(post: u64, content: impl Into<String>) -> Self {
        Self {
            post: Some(post),
            content: Some(content.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comment_decode() {
        let body = json!({
            "id": 55,
            "post": 42,
            "parent": 0,
            "status": "approved",
            "content": {"rendered": "<p>Nice post.</p>"}
        });

        let comment: Comment = serde_json::from_value(body).unwrap();
        assert_eq!(comment.id, 55);
        assert_eq!(comment.post, Some(42));
        assert_eq!(comment.status.as_deref(), Some("approved"));
    }

    #[test]
    fn test_on_post_shorthand() {
        let params = CommentParams::on_post(42, "Thanks!");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"post": 42, "content": "Thanks!"})
        );
    }
}
