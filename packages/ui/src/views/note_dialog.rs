use dioxus::prelude::*;

use super::ModalOverlay;
use crate::auth::use_controller;
use crate::dialog::NoteDialog;

/// Form dialog for creating or editing a note.
///
/// The fields start from the dialog's values; a rejected submit keeps whatever
/// was typed and shows the validation message above the buttons.
#[component]
pub fn NoteDialogView(dialog: NoteDialog) -> Element {
    let controller = use_controller();
    let initial_title = dialog.title.clone();
    let initial_content = dialog.content.clone();
    let mut title = use_signal(move || initial_title);
    let mut content = use_signal(move || initial_content);
    let mut busy = use_signal(|| false);

    let closing = controller.clone();
    let cancelling = controller.clone();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let controller = controller.clone();
        async move {
            if busy() {
                return;
            }
            busy.set(true);
            controller.submit_editor(&title(), &content()).await;
            busy.set(false);
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| closing.close_editor(),
            form {
                id: "note-form",
                class: "p-6 flex flex-col gap-4",
                onsubmit: handle_submit,
                h2 { class: "m-0 text-lg font-semibold text-white", "{dialog.heading()}" }
                label { class: "form-label", r#for: "note-title", "Title" }
                input {
                    id: "note-title",
                    class: "form-input",
                    r#type: "text",
                    value: "{title}",
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
                label { class: "form-label", r#for: "note-content", "Content" }
                textarea {
                    id: "note-content",
                    class: "form-input",
                    rows: "8",
                    value: "{content}",
                    oninput: move |evt: FormEvent| content.set(evt.value()),
                }
                if let Some(error) = &dialog.error {
                    p { class: "form-error text-red-400 text-sm", "{error}" }
                }
                div {
                    class: "flex justify-end gap-3",
                    button {
                        r#type: "button",
                        class: "btn-secondary",
                        onclick: move |_| cancelling.close_editor(),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn-primary",
                        disabled: busy(),
                        "{dialog.confirm_label()}"
                    }
                }
            }
        }
    }
}
