//! # Client configuration: `mino.toml`
//!
//! Defines the TOML file that configures the notes client
//! (filename: [`ClientConfig::filename`] = `"mino.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:4566/restapis/mino/dev/_user_request_/"
//!
//! [session]
//! storage_key = "token"
//!
//! [notifications]
//! toast_secs = 3
//! status_dialog_ms = 1500
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`ApiConfig`] | Base URL of the notes REST API. Endpoint paths are appended to it. |
//! | [`SessionConfig`] | Key under which the bearer token is persisted. |
//! | [`NotificationConfig`] | How long toasts and success dialogs stay on screen. |
//!
//! Every field has a default, so a missing or empty file equals
//! [`ClientConfig::default`].

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `mino.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Seconds a toast stays visible.
    #[serde(default = "default_toast_secs")]
    pub toast_secs: u32,
    /// Milliseconds before a success dialog closes itself.
    #[serde(default = "default_status_dialog_ms")]
    pub status_dialog_ms: u32,
}

fn default_base_url() -> String {
    "http://localhost:4566/restapis/mino/dev/_user_request_/".to_string()
}

fn default_storage_key() -> String {
    "token".to_string()
}

fn default_toast_secs() -> u32 {
    3
}

fn default_status_dialog_ms() -> u32 {
    1500
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            toast_secs: default_toast_secs(),
            status_dialog_ms: default_status_dialog_ms(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            ..Self::default()
        }
    }

    /// Builder method to set the toast duration.
    pub fn with_toast_secs(mut self, secs: u32) -> Self {
        self.notifications.toast_secs = secs;
        self
    }

    /// Builder method to set the token storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.session.storage_key = key.into();
        self
    }

    /// Replace the base URL when `value` is present and non-blank.
    pub fn with_base_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            self.api.base_url = url;
        }
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "mino.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &std::path::Path) -> Result<Self, String> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text)
                .map_err(|e| format!("Invalid config {}: {}", path.display(), e)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(format!("Failed to read {}: {}", path.display(), e)),
        }
    }
}
