use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close` when one is given.
#[component]
pub fn ModalOverlay(on_close: Option<EventHandler<()>>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay fixed inset-0 flex items-center justify-center bg-black/50",
            style: "z-index: 2000",
            onclick: move |_| {
                if let Some(on_close) = on_close {
                    on_close.call(());
                }
            },
            div {
                class: "modal-card bg-gray-800 border border-gray-700 rounded-lg shadow-lg max-w-md w-full mx-4",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
