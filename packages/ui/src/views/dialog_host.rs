use dioxus::prelude::*;

use super::{ModalOverlay, NoteDialogView};
use crate::auth::{use_client_state, use_controller};
use crate::dialog::Modal;
use crate::platform::sleep_ms;

/// Draws the note editor and the current blocking dialog, and closes success
/// dialogs after their delay.
#[component]
pub fn DialogHost() -> Element {
    let state = use_client_state();
    let controller = use_controller();

    let modal = use_memo(move || {
        let state = state.read();
        (state.modal.clone(), state.modal_seq)
    });

    let expiring = controller.clone();
    use_effect(move || {
        let (modal, seq) = modal();
        if !modal.as_ref().is_some_and(Modal::auto_dismisses) {
            return;
        }
        let controller = expiring.clone();
        let ms = controller.notifications().status_dialog_ms;
        spawn(async move {
            sleep_ms(ms).await;
            controller.expire_modal(seq);
        });
    });

    let editor = state.read().editor.dialog().cloned();
    let (current, _) = modal();

    rsx! {
        if let Some(dialog) = editor {
            NoteDialogView { key: "{dialog.key()}", dialog: dialog.clone() }
        }
        if let Some(modal) = current {
            StatusDialog { modal: modal }
        }
    }
}

/// Confirmation, progress, success or failure dialog.
#[component]
pub fn StatusDialog(modal: Modal) -> Element {
    let controller = use_controller();
    let dismissable = modal.dismissable();
    let title = modal.title().to_string();
    let text = modal.text().map(str::to_string);

    let closing = controller.clone();
    let cancelling = controller.clone();
    let confirming = controller.clone();

    rsx! {
        ModalOverlay {
            on_close: move |_| {
                if dismissable {
                    closing.dismiss_modal();
                }
            },
            div {
                class: "status-dialog p-6 text-center",
                if matches!(modal, Modal::Loading { .. }) {
                    div { class: "spinner mx-auto mb-4" }
                }
                h2 { class: "text-xl font-semibold text-white mb-2", "{title}" }
                if let Some(text) = text {
                    p { class: "text-gray-300 mb-4", "{text}" }
                }
                {match modal {
                    Modal::ConfirmDelete { .. } => rsx! {
                        div {
                            class: "flex justify-center gap-3",
                            button {
                                class: "btn-danger",
                                onclick: move |_| {
                                    let controller = confirming.clone();
                                    async move { controller.confirm_delete().await }
                                },
                                "Yes, delete it!"
                            }
                            button {
                                class: "btn-secondary",
                                onclick: move |_| cancelling.dismiss_modal(),
                                "Cancel"
                            }
                        }
                    },
                    Modal::Failure { .. } => rsx! {
                        button {
                            class: "btn-primary",
                            onclick: move |_| cancelling.dismiss_modal(),
                            "OK"
                        }
                    },
                    Modal::Loading { .. } | Modal::Success { .. } => rsx! {},
                }}
            }
        }
    }
}
