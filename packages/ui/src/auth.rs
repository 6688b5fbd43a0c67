//! Client context and hooks for the UI.

use dioxus::prelude::*;
use store::ClientConfig;

use crate::platform::{make_controller, sleep_ms, AppController};
use crate::state::ClientState;

/// Get the current client state.
/// Returns a signal that updates after every controller event.
pub fn use_client_state() -> Signal<ClientState> {
    use_context::<Signal<ClientState>>()
}

/// Get the shared controller for dispatching user actions.
pub fn use_controller() -> AppController {
    use_context::<AppController>()
}

/// Provider component that owns the controller and its state signal.
/// Wrap your app with this component; it restores any saved session on mount.
#[component]
pub fn ClientProvider(config: ClientConfig, children: Element) -> Element {
    let mut state = use_signal(ClientState::default);

    let controller = use_hook(|| {
        let controller = make_controller(&config);
        controller.subscribe(move |next| state.set(next.clone()));
        controller
    });
    use_context_provider(|| controller.clone());
    use_context_provider(|| state);

    // Restore the saved session once on mount
    let restoring = controller.clone();
    use_hook(move || {
        spawn(async move {
            restoring.restore().await;
        });
    });

    // Hide each toast once its window has passed
    let toast = use_memo(move || state.read().toast.clone());
    let expiring = controller.clone();
    use_effect(move || {
        let toast = toast();
        if !toast.visible {
            return;
        }
        let controller = expiring.clone();
        let ms = controller.notifications().toast_secs.saturating_mul(1000);
        spawn(async move {
            sleep_ms(ms).await;
            controller.expire_toast(toast.generation);
        });
    });

    rsx! {
        {children}
    }
}
