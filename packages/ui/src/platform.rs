//! Platform wiring for the shared controller.
//!
//! Picks the [`store::TokenStore`] and timer for the current target:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): a file under `<data_dir>/mino/` via [`store::FileStore`]
//! - **WASM without `web`**: in-memory only

use api::HttpClient;
use store::ClientConfig;

use crate::controller::Controller;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformTokenStore = store::LocalStorageStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformTokenStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTokenStore = store::FileStore;

/// The controller the Dioxus app runs with.
pub type AppController = Controller<HttpClient, PlatformTokenStore>;

pub fn make_token_store(config: &ClientConfig) -> PlatformTokenStore {
    let key = config.session.storage_key.clone();
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new(key)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new(key)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("mino");
        store::FileStore::new(base, key)
    }
}

pub fn make_controller(config: &ClientConfig) -> AppController {
    let client = HttpClient::new(config.api.base_url.clone());
    tracing::info!(base_url = client.base_url(), "Using notes API");
    Controller::new(client, make_token_store(config))
        .with_notifications(config.notifications.clone())
}

/// Load the client configuration for this platform.
///
/// On native targets this reads `<config_dir>/mino/mino.toml` and then applies the
/// `MINO_API_URL` environment override. The browser build uses the defaults.
/// A broken file is logged and replaced by the defaults.
pub fn load_config() -> ClientConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("mino")
            .join(ClientConfig::filename());
        let config = ClientConfig::load(&path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring {}: {}", path.display(), e);
            ClientConfig::default()
        });
        config.with_base_url_override(std::env::var("MINO_API_URL").ok())
    }
    #[cfg(target_arch = "wasm32")]
    {
        ClientConfig::default()
    }
}

pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}
