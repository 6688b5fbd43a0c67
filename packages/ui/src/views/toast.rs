use dioxus::prelude::*;

use crate::auth::use_client_state;

/// Bottom-right toast. Expiry is scheduled by the client provider.
#[component]
pub fn ToastView() -> Element {
    let state = use_client_state();
    let toast = state.read().toast.clone();

    rsx! {
        div {
            id: "toast",
            class: if toast.visible { "toast show" } else { "toast" },
            span { id: "toast-message", "{toast.message}" }
        }
    }
}
