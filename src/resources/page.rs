//! Page resource models.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::resources::common::{CommentStatus, PingStatus, PostStatus, Rendered};

/// A WordPress page as returned by the API.
///
/// Pages are hierarchical: `parent` points at the containing page and
/// `menu_order` controls sibling ordering.
#[derive(Clone, Debug, Deserialize)]
pub struct Page {
    /// Unique page identifier.
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
    /// Permalink.
    #[serde(default)]
    pub link: Option<String>,
    /// Page title.
    #[serde(default)]
    pub title: Option<Rendered>,
    /// Page body.
    #[serde(default)]
    pub content: Option<Rendered>,
    /// Page excerpt.
    #[serde(default)]
    pub excerpt: Option<Rendered>,
    /// Author user ID.
    #[serde(default)]
    pub author: Option<u64>,
    /// Featured image attachment ID.
    #[serde(default)]
    pub featured_media: Option<u64>,
    /// Parent page ID (0 for top-level pages).
    #[serde(default)]
    pub parent: Option<u64>,
    /// Order among sibling pages.
    #[serde(default)]
    pub menu_order: Option<i32>,
    /// Whether comments are open.
    #[serde(default)]
    pub comment_status: Option<CommentStatus>,
    /// Whether pings are accepted.
    #[serde(default)]
    pub ping_status: Option<PingStatus>,
    /// Theme template file.
    #[serde(default)]
    pub template: Option<String>,
    /// Custom fields, when exposed.
    #[serde(default, deserialize_with = "crate::resources::deserialize_meta")]
    pub meta: HashMap<String, serde_json::Value>,
}

/// Partial payload for creating or updating a page.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PageParams {
    /// Page title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Page body HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Page excerpt.
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
    /// Parent page ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
    /// Order among sibling pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_order: Option<i32>,
    /// Featured image attachment ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_media: Option<u64>,
    /// Whether comments are open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_status: Option<CommentStatus>,
    /// Theme template file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Custom fields to set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, serde_json::Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_decode() {
        let body = json!({
            "id": 9,
            "slug": "about",
            "parent": 0,
            "menu_order": 2,
            "title": {"rendered": "About"}
        });

        let page: Page = serde_json::from_value(body).unwrap();
        assert_eq!(page.id, 9);
        assert_eq!(page.parent, Some(0));
        assert_eq!(page.menu_order, Some(2));
    }

    #[test]
    fn test_page_params_partial_encoding() {
        let params = PageParams {
            parent: Some(4),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&params).unwrap(), json!({"parent": 4}));
    }
}
