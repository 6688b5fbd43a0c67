//! Note records and the response envelope shared by every endpoint.

use serde::{Deserialize, Serialize};

/// A note as stored by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Note {
    #[serde(rename = "noteId", default)]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

/// Body of create and update requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// `{success, message, data}` wrapper returned by the notes and register endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}
