//! User resource models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A WordPress user.
///
/// Most account fields (`username`, `email`, `roles`) only appear in the
/// `edit` context; the public `view` context exposes display data only.
#[derive(Clone, Debug, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: u64,
    /// Login name (edit context only).
    #[serde(default)]
    pub username: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// First name (edit context only).
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name (edit context only).
    #[serde(default)]
    pub last_name: Option<String>,
    /// Email address (edit context only).
    #[serde(default)]
    pub email: Option<String>,
    /// Author website URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Biographical description.
    #[serde(default)]
    pub description: Option<String>,
    /// Author archive link.
    #[serde(default)]
    pub link: Option<String>,
    /// URL-friendly slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Assigned roles (edit context only).
    #[serde(default)]
    pub roles: Vec<String>,
    /// Avatar URLs keyed by pixel size.
    #[serde(default)]
    pub avatar_urls: HashMap<String, String>,
    /// Custom fields, when exposed.
    #[serde(default, deserialize_with = "crate::resources::deserialize_meta")]
    pub meta: HashMap<String, serde_json::Value>,
}

/// Partial payload for creating or updating a user.
///
/// `username`, `email`, and `password` are required by the server on create;
/// the client leaves that validation to the API so partial updates stay
/// unconstrained.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserParams {
    /// Login name (create only, immutable afterwards).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Account password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Author website URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Biographical description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Roles to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_view_context_user_decodes_without_account_fields() {
        let body = json!({
            "id": 1,
            "name": "Admin",
            "avatar_urls": {"96": "https://example.com/avatar.png"}
        });

        let user: User = serde_json::from_value(body).unwrap();
        assert_eq!(user.id, 1);
        assert!(user.email.is_none());
        assert!(user.roles.is_empty());
    }

    #[test]
    fn test_user_params_omit_password_when_unset() {
        let params = UserParams {
            name: Some("New Name".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"name": "New Name"})
        );
    }
}
