//! Tag resource models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A tag term.
#[derive(Clone, Debug, Deserialize)]
pub struct Tag {
    /// Unique term identifier.
    pub id: u64,
    /// Number of posts with the tag.
    #[serde(default)]
    pub count: Option<u64>,
    /// Tag description.
    #[serde(default)]
    pub description: Option<String>,
    /// Archive page link.
    #[serde(default)]
    pub link: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// URL-friendly slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Taxonomy key (normally `post_tag`).
    #[serde(default)]
    pub taxonomy: Option<String>,
    /// Custom fields, when exposed.
    #[serde(default, deserialize_with = "crate::resources::deserialize_meta")]
    pub meta: HashMap<String, serde_json::Value>,
}

/// Partial payload for creating or updating a tag.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TagParams {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tag description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL-friendly slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl TagParams {
    /// Shorthand for a tag with just a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
