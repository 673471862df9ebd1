//! Data Transfer Objects - request/response types for the posts API.

use serde::{Deserialize, Serialize};

/// Request to write a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWrite {
    pub username: String,
    pub raw_password: String,
    pub title: String,
    pub content: String,
}

/// Request to edit a post. The target id travels in the path.
///
/// Both fields are replaced; there is no partial patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostEdit {
    pub title: String,
    pub content: String,
}

/// Single post view. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: i64,
    pub username: String,
    pub title: String,
    pub content: String,
}

/// List view of a post, without the content body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: i64,
    pub username: String,
    pub title: String,
}

/// Password confirmation for a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordCheck {
    pub raw_password: String,
}

impl PasswordCheck {
    /// A plain-text body is the password itself, byte for byte.
    pub fn from_text(body: String) -> Self {
        Self { raw_password: body }
    }

    /// A JSON body must be `{"rawPassword": "..."}`.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
