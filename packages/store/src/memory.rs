use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::token::TokenStore;

/// In-memory TokenStore for testing and platforms without persistence.
///
/// Clones share the same backing map, so a test can keep a handle and inspect what
/// the controller stored.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    key: String,
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new("token")
    }
}

impl MemoryStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            values: Arc::default(),
        }
    }

    /// Create a store that already holds `token`.
    pub fn with_token(key: impl Into<String>, token: &str) -> Self {
        let store = Self::new(key);
        store
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(store.key.clone(), token.to_string());
        store
    }

    /// Synchronous peek used by tests and diagnostics.
    pub fn current(&self) -> Option<String> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner).get(&self.key).cloned()
    }
}

impl TokenStore for MemoryStore {
    async fn load(&self) -> Option<String> {
        self.current().and_then(crate::token::non_empty)
    }

    async fn save(&self, token: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(self.key.clone(), token.to_string());
    }

    async fn clear(&self) {
        self.values.lock().unwrap_or_else(PoisonError::into_inner).remove(&self.key);
    }
}
