//! # User and credential models
//!
//! The notes service identifies users by a server-assigned `userId` and an email.
//! Two shapes cross the wire:
//!
//! - [`Credentials`]: the `{email, password}` body of both `POST auth` and
//!   `POST register`.
//! - [`UserInfo`]: the user object returned next to the token by `POST auth`.
//!   The password hash never leaves the server, so it has no field here.
//!
//! [`AuthResponse`] bundles the bearer token with its [`UserInfo`].

use serde::{Deserialize, Serialize};

/// Login or registration credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// User information safe to keep on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(rename = "userId", default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl UserInfo {
    /// Get display name. The service has no name field, so this is the email.
    pub fn display_name(&self) -> &str {
        &self.email
    }
}

/// Successful `POST auth` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}
