use dioxus::prelude::*;

use ui::views::{AuthForms, DialogHost, NotesView, ToastView};
use ui::{ActivityLogPanel, ClientProvider, Navbar, View};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    init_tracing();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting MiNo client");
    dioxus::launch(App);
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`). Reads `.env` first.
#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        eprintln!("tracing subscriber already installed");
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(ui::load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::VIEWS_CSS }

        ClientProvider {
            config: config,
            Shell {}
        }
    }
}

/// Switches between the auth forms and the notes screen.
#[component]
fn Shell() -> Element {
    let state = ui::use_client_state();
    let view = state.read().view();

    rsx! {
        Navbar {}
        main {
            {match view {
                View::Auth => rsx! { AuthForms {} },
                View::Notes => rsx! { NotesView {} },
            }}
        }
        DialogHost {}
        ToastView {}
        ActivityLogPanel {}
    }
}
