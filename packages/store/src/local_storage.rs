//! # Browser `localStorage` token store
//!
//! [`LocalStorageStore`] is the [`TokenStore`] used on the **web platform**. The token
//! lives under a single fixed key in `window.localStorage`, so it survives reloads of
//! the page.
//!
//! A missing window or a storage access error (private browsing, disabled storage)
//! reads as "no token" and drops writes.

use crate::token::{non_empty, TokenStore};

#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageStore {
    async fn load(&self) -> Option<String> {
        Self::storage()?
            .get_item(&self.key)
            .ok()
            .flatten()
            .and_then(non_empty)
    }

    async fn save(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(&self.key, token).is_err() {
                    tracing::warn!("localStorage rejected token write");
                }
            }
            None => tracing::warn!("localStorage unavailable, token not persisted"),
        }
    }

    async fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
