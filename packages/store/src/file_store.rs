//! # Filesystem-backed token store
//!
//! [`FileStore`] is the [`TokenStore`] used on desktop and other native targets. The
//! token is written as plain text to `<base_dir>/<storage_key>`.
//!
//! ## Platform data directories
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/mino/` |
//! | Linux | `~/.local/share/mino/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\mino\` |

use std::path::PathBuf;

use crate::token::{non_empty, TokenStore};

/// Filesystem-backed TokenStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(base: PathBuf, key: impl Into<String>) -> Self {
        Self {
            base,
            key: key.into(),
        }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(&self.key)
    }
}

impl TokenStore for FileStore {
    async fn load(&self) -> Option<String> {
        std::fs::read_to_string(self.token_path())
            .ok()
            .and_then(non_empty)
    }

    async fn save(&self, token: &str) {
        let path = self.token_path();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&path, token) {
            tracing::warn!("Failed to persist token to {}: {}", path.display(), e);
        }
    }

    async fn clear(&self) {
        let path = self.token_path();
        if let Err(e) = std::fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to remove token {}: {}", path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_base(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mino_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = temp_base("roundtrip");

        let store = FileStore::new(dir.clone(), "token");
        assert!(store.load().await.is_none());
        store.save("a.b.c").await;

        // Re-open from same directory
        let reopened = FileStore::new(dir.clone(), "token");
        assert_eq!(reopened.load().await.as_deref(), Some("a.b.c"));

        reopened.clear().await;
        assert!(store.load().await.is_none());

        // Clearing twice is harmless
        reopened.clear().await;

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }
}
