//! # Claims preview: unverified token payload decoding
//!
//! Bearer tokens issued by the notes service are three dot-separated segments
//! (`header.payload.signature`). [`preview_claims`] base64-decodes the middle segment
//! and parses it as JSON so the client can show who is signed in after a reload.
//!
//! The signature is **not** checked. A [`TokenClaims`] value is display data only:
//! every request still carries the raw token and the service decides whether it is
//! valid. Nothing in the client grants access based on these claims.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::models::UserInfo;

/// Payload fields the service puts in its tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TokenClaims {
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub email: String,
    /// Expiry, seconds since the Unix epoch.
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub iss: Option<String>,
}

impl TokenClaims {
    /// Project the claims into the user shown in the header.
    pub fn to_user(&self) -> UserInfo {
        UserInfo {
            id: self.user_id.clone(),
            email: self.email.clone(),
            created_at: None,
        }
    }
}

/// Decode the payload segment of `token` without verifying it.
pub fn preview_claims(token: &str) -> Result<TokenClaims, String> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(format!(
            "Invalid token format: expected 3 segments, found {}",
            parts.len()
        ));
    }

    // Accept both alphabets and stray padding.
    let payload: String = parts[1]
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.as_bytes())
        .map_err(|e| format!("Invalid token payload encoding: {}", e))?;

    serde_json::from_slice(&bytes).map_err(|e| format!("Invalid token payload: {}", e))
}
