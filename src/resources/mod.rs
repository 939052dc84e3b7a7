//! Typed models for WordPress REST resources.
//!
//! Each resource has a read model decoded from API responses (tolerant of
//! unknown fields, everything optional except `id`) and a `*Params` write
//! payload whose unset fields are omitted from the encoded JSON.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

pub mod category;
pub mod comment;
pub mod common;
pub mod media;
pub mod page;
pub mod post;
pub mod tag;
pub mod user;

pub use category::{Category, CategoryParams};
pub use comment::{Comment, CommentParams};
pub use common::{
    CommentStatus, Context, PingStatus, PostFormat, PostStatus, Rendered,
};
pub use media::{Media, MediaParams};
pub use page::{Page, PageParams};
pub use post::{Post, PostParams};
pub use tag::{Tag, TagParams};
pub use user::{User, UserParams};

/// Decodes a `meta` field into a map.
///
/// WordPress serializes an empty meta collection as `[]` rather than `{}`
/// because of PHP array semantics, so a plain map field would fail to decode
/// on most responses. Anything that is not a JSON object maps to an empty
/// `HashMap`.
pub(crate) fn deserialize_meta<'de, D>(
    deserializer: D,
) -> Result<HashMap<String, serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Object(map) => Ok(map.into_iter().collect()),
        _ => Ok(HashMap::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_meta")]
        meta: HashMap<String, serde_json::Value>,
    }

    #[test]
    fn test_meta_empty_array_becomes_empty_map() {
        let holder: Holder = serde_json::from_value(json!({"meta": []})).unwrap();
        assert!(holder.meta.is_empty());
    }

    #[test]
    fn test_meta_object_is_preserved() {
        let holder: Holder =
            serde_json::from_value(json!({"meta": {"views": 7}})).unwrap();
        assert_eq!(holder.meta.get("views"), Some(&json!(7)));
    }

    #[test]
    fn test_meta_missing_defaults_to_empty() {
        let holder: Holder = serde_json::from_value(json!({})).unwrap();
        assert!(holder.meta.is_empty());
    }

    #[test]
    fn test_meta_null_becomes_empty_map() {
        let holder: Holder = serde_json::from_value(json!({"meta": null})).unwrap();
        assert!(holder.meta.is_empty());
    }
}
