//! # Token persistence
//!
//! The client persists exactly one value between runs: the bearer token issued at
//! login. [`TokenStore`] abstracts where it lives so the same controller logic works
//! against browser `localStorage` ([`crate::LocalStorageStore`]), a file in the
//! platform data directory ([`crate::FileStore`]), or memory ([`crate::MemoryStore`]).
//!
//! Implementations swallow backend failures: a broken store reads as "no token" and
//! writes are dropped after a warning, which degrades to "logged out on next start".

/// Async trait for persisting the session token under a fixed key.
pub trait TokenStore {
    fn load(&self) -> impl std::future::Future<Output = Option<String>>;
    fn save(&self, token: &str) -> impl std::future::Future<Output = ()>;
    fn clear(&self) -> impl std::future::Future<Output = ()>;
}

/// Treat blank stored values as absent.
pub(crate) fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
