use dioxus::prelude::*;

use crate::auth::{use_client_state, use_controller};
use crate::render::{render_notes, CardMarkup, NotesMarkup};

/// Note grid with the "new note" action. Notes keep the service's order.
#[component]
pub fn NotesView() -> Element {
    let state = use_client_state();
    let controller = use_controller();
    let markup = render_notes(&state.read().notes);

    rsx! {
        section {
            id: "notes-container",
            class: "max-w-6xl mx-auto p-6",
            div {
                class: "flex items-center justify-between mb-6",
                h2 { class: "text-2xl font-semibold text-white", "My Notes" }
                button {
                    id: "new-note-btn",
                    class: "btn-primary",
                    onclick: move |_| controller.open_new_note(),
                    "New Note"
                }
            }
            {match markup {
                NotesMarkup::Empty => rsx! { EmptyState {} },
                NotesMarkup::Grid(cards) => rsx! {
                    div {
                        id: "notes-list",
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                        for card in cards {
                            NoteCard { key: "{card.id}", card: card.clone() }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
pub fn EmptyState() -> Element {
    rsx! {
        div {
            class: "text-center py-16 text-gray-400",
            h3 { class: "text-lg font-medium mb-2", "No notes yet" }
            p { "Create your first note to get started" }
        }
    }
}

/// One note card, drawn from the renderer's escaped markup.
#[component]
pub fn NoteCard(card: CardMarkup) -> Element {
    let controller = use_controller();

    let editing = controller.clone();
    let edit_id = card.id.clone();
    let delete_id = card.id.clone();

    rsx! {
        div {
            class: "note-card bg-gray-800 rounded-lg border border-gray-700 p-4 shadow-md overflow-hidden",
            div { dangerous_inner_html: "{card.body}" }
            div {
                class: "flex justify-between items-center border-t border-gray-700 pt-3",
                span { class: "text-gray-500 text-xs", "{card.date}" }
                div {
                    class: "note-actions flex gap-2",
                    button {
                        class: "edit-note text-gray-400 hover:text-white",
                        "data-id": "{card.id}",
                        onclick: move |_| editing.open_edit_note(&edit_id),
                        "Edit"
                    }
                    button {
                        class: "delete-note text-gray-400 hover:text-red-400",
                        "data-id": "{card.id}",
                        onclick: move |_| controller.request_delete(&delete_id),
                        "Delete"
                    }
                }
            }
        }
    }
}
