use dioxus::prelude::*;

use crate::activity_log::LogLevel;
use crate::auth::{use_client_state, use_controller};

#[component]
pub fn ActivityLogPanel() -> Element {
    let state = use_client_state();
    let controller = use_controller();

    let log = state.read().log.clone();
    if !log.visible {
        return rsx! {};
    }

    let clearing = controller.clone();

    rsx! {
        div {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "Activity Log" }
                div {
                    class: "activity-log-header-actions",
                    button {
                        onclick: move |_| clearing.clear_log(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| controller.toggle_log(),
                        "Close"
                    }
                }
            }
            div {
                class: "activity-log-entries",
                for entry in log.entries.iter().rev() {
                    div {
                        class: match entry.level {
                            LogLevel::Error => "activity-log-entry error",
                            LogLevel::Warning => "activity-log-entry warning",
                            LogLevel::Success => "activity-log-entry success",
                            LogLevel::Info => "activity-log-entry info",
                        },
                        span { class: "activity-log-time", "{entry.timestamp}" }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ActivityLogToggle() -> Element {
    let state = use_client_state();
    let controller = use_controller();
    let count = state.read().log.entries.len();
    let has_errors = state.read().log.has_errors();

    rsx! {
        button {
            class: if has_errors { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            onclick: move |_| controller.toggle_log(),
            title: "Activity log",
            if count > 0 {
                "{count}"
            } else {
                "Log"
            }
        }
    }
}
