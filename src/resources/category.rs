//! Category resource models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A category term.
#[derive(Clone, Debug, Deserialize)]
pub struct Category {
    /// Unique term identifier.
    pub id: u64,
    /// Number of posts in the category.
    #[serde(default)]
    pub count: Option<u64>,
    /// Category description.
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
    /// Taxonomy key (normally `category`).
    #[serde(default)]
    pub taxonomy: Option<String>,
    /// Parent category ID (0 for top-level).
    #[serde(default)]
    pub parent: Option<u64>,
    /// Custom fields, when exposed.
    #[serde(default, deserialize_with = "crate::resources::deserialize_meta")]
    pub meta: HashMap<String, serde_json::Value>,
}

/// Partial payload for creating or updating a category.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CategoryParams {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Category description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL-friendly slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Parent category ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
}

impl CategoryParams {
    /// Shorthand for a category with just a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
