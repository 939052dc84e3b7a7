//! Shared value types and enumerations used across resource models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A rendered content block (`{"rendered": "...", "protected": false}`).
///
/// WordPress returns titles, content, and excerpts in this shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    /// The rendered HTML.
    pub rendered: String,
    /// Whether the content is password protected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,
}

impl Rendered {
    /// Wraps a rendered string.
    #[must_use]
    pub fn new(rendered: impl Into<String>) -> Self {
        Self {
            rendered: rendered.into(),
            protected: None,
        }
    }
}

/// Response context governing which fields the API includes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    /// Public read view (default).
    #[default]
    View,
    /// Minimal fields for embedding.
    Embed,
    /// Full fields, requires edit permission.
    Edit,
}

impl Context {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Embed => "embed",
            Self::Edit => "edit",
        }
    }
}

/// Publication status of a post or page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostStatus {
    /// Published and publicly visible.
    Publish,
    /// Scheduled for future publication.
    Future,
    /// Unpublished draft.
    #[default]
    Draft,
    /// Awaiting review.
    Pending,
    /// Visible only to permitted users.
    Private,
    /// Moved to trash.
    Trash,
    /// Auto-saved draft.
    AutoDraft,
    /// Status inherited from the parent (revisions, attachments).
    Inherit,
}

impl PostStatus {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Publish => "publish",
            Self::Future => "future",
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Private => "private",
            Self::Trash => "trash",
            Self::AutoDraft => "auto-draft",
            Self::Inherit => "inherit",
        }
    }
}

impl FromStr for PostStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publish" => Ok(Self::Publish),
            "future" => Ok(Self::Future),
            "draft" => Ok(Self::Draft),
            "pending" => Ok(Self::Pending),
            "private" => Ok(Self::Private),
            "trash" => Ok(Self::Trash),
            "auto-draft" => Ok(Self::AutoDraft),
            "inherit" => Ok(Self::Inherit),
            other => Err(Error::InvalidQuery {
                message: format!("'{other}' is not a valid post status"),
            }),
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether comments are open on a piece of content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    /// Comments accepted.
    Open,
    /// Comments closed.
    Closed,
}

/// Whether pingbacks/trackbacks are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PingStatus {
    /// Pings accepted.
    Open,
    /// Pings closed.
    Closed,
}

/// Post format (theme presentation hint).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostFormat {
    /// Standard post.
    #[default]
    Standard,
    /// Short aside.
    Aside,
    /// Chat transcript.
    Chat,
    /// Image gallery.
    Gallery,
    /// External link.
    Link,
    /// Single image.
    Image,
    /// Quotation.
    Quote,
    /// Short status update.
    Status,
    /// Video post.
    Video,
    /// Audio post.
    Audio,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_status_wire_values() {
        assert_eq!(PostStatus::Publish.as_str(), "publish");
        assert_eq!(PostStatus::AutoDraft.as_str(), "auto-draft");
        assert_eq!(
            serde_json::to_string(&PostStatus::AutoDraft).unwrap(),
            r#""auto-draft""#
        );
    }

    #[test]
    fn test_post_status_from_str_validates() {
        assert_eq!("publish".parse::<PostStatus>().unwrap(), PostStatus::Publish);
        assert!(matches!(
            "published".parse::<PostStatus>(),
            Err(Error::InvalidQuery { .. })
        ));
    }

    #[test]
    fn test_rendered_round_trip() {
        let json = r#"{"rendered":"<p>Hello</p>","protected":false}"#;
        let rendered: Rendered = serde_json::from_str(json).unwrap();
        assert_eq!(rendered.rendered, "<p>Hello</p>");
        assert_eq!(rendered.protected, Some(false));
    }

    #[test]
    fn test_context_values() {
        assert_eq!(Context::default().as_str(), "view");
        assert_eq!(Context::Edit.as_str(), "edit");
    }
}
