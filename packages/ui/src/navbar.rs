use dioxus::prelude::*;

use crate::activity_log_panel::ActivityLogToggle;
use crate::auth::{use_client_state, use_controller};
use crate::state::{AuthTab, HeaderActions};

/// Top bar: app name, then either the signed-in user with logout or the
/// button that brings up the auth forms.
#[component]
pub fn Navbar() -> Element {
    let state = use_client_state();
    let controller = use_controller();
    let actions = state.read().header_actions();

    rsx! {
        nav {
            class: "navbar flex items-center justify-between px-6 py-3 bg-gray-900 border-b border-gray-700",
            span { class: "text-xl font-semibold text-white", "MiNo" }
            div {
                class: "flex items-center gap-4",
                ActivityLogToggle {}
                {match actions {
                    HeaderActions::SignedIn { email } => rsx! {
                        span { id: "user-email", class: "text-gray-300 text-sm", "{email}" }
                        button {
                            id: "logout-btn",
                            class: "btn-secondary",
                            onclick: move |_| {
                                let controller = controller.clone();
                                async move { controller.logout().await }
                            },
                            "Logout"
                        }
                    },
                    HeaderActions::SignedOut => rsx! {
                        button {
                            id: "show-auth-btn",
                            class: "btn-primary",
                            onclick: move |_| controller.switch_tab(AuthTab::Login),
                            "Login / Register"
                        }
                    },
                }}
            }
        }
    }
}
