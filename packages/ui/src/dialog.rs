//! # Editor and modal models
//!
//! The note editor and the blocking dialogs are plain data; the Dioxus views in
//! [`crate::views`] draw whatever [`crate::ClientState`] holds.
//!
//! - [`EditorState`]: `Closed` or `Open` with a [`NoteDialog`] for creating or
//!   editing one note.
//! - [`Modal`]: the single blocking dialog slot (delete confirmation, in-flight
//!   request, success, failure).

use api::{Note, NoteDraft};

/// What the editor dialog will do on confirm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(String),
}

/// Form dialog for creating or editing a note.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteDialog {
    pub mode: EditorMode,
    /// Initial values of the form fields.
    pub title: String,
    pub content: String,
    /// Validation message shown inside the dialog.
    pub error: Option<String>,
}

impl NoteDialog {
    pub fn create() -> Self {
        Self {
            mode: EditorMode::Create,
            title: String::new(),
            content: String::new(),
            error: None,
        }
    }

    pub fn edit(note: &Note) -> Self {
        Self {
            mode: EditorMode::Edit(note.id.clone()),
            title: note.title.clone(),
            content: note.content.clone(),
            error: None,
        }
    }

    pub fn is_new(&self) -> bool {
        self.mode == EditorMode::Create
    }

    pub fn heading(&self) -> &'static str {
        if self.is_new() {
            "Create New Note"
        } else {
            "Edit Note"
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        if self.is_new() {
            "Create"
        } else {
            "Save"
        }
    }

    /// Stable key so the form remounts when a different note is opened.
    pub fn key(&self) -> String {
        match &self.mode {
            EditorMode::Create => "new".to_string(),
            EditorMode::Edit(id) => format!("edit-{id}"),
        }
    }

    /// Check the submitted fields. An empty title is rejected; whitespace counts as text.
    pub fn validate(&self, title: &str, content: &str) -> Result<NoteDraft, String> {
        if title.is_empty() {
            return Err("Title is required".to_string());
        }
        Ok(NoteDraft::new(title, content))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditorState {
    #[default]
    Closed,
    Open(NoteDialog),
}

impl EditorState {
    pub fn is_open(&self) -> bool {
        matches!(self, EditorState::Open(_))
    }

    pub fn dialog(&self) -> Option<&NoteDialog> {
        match self {
            EditorState::Open(dialog) => Some(dialog),
            EditorState::Closed => None,
        }
    }
}

/// The blocking dialog currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub enum Modal {
    ConfirmDelete { note_id: String },
    Loading { title: String },
    Success { title: String, text: Option<String> },
    Failure { text: String },
}

impl Modal {
    pub fn title(&self) -> &str {
        match self {
            Modal::ConfirmDelete { .. } => "Are you sure?",
            Modal::Loading { title } | Modal::Success { title, .. } => title,
            Modal::Failure { .. } => "Oops...",
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Modal::ConfirmDelete { .. } => Some("You won't be able to revert this!"),
            Modal::Loading { .. } => None,
            Modal::Success { text, .. } => text.as_deref(),
            Modal::Failure { text } => Some(text),
        }
    }

    /// Success dialogs close on their own after a short delay.
    pub fn auto_dismisses(&self) -> bool {
        matches!(self, Modal::Success { .. })
    }

    /// Loading dialogs cannot be dismissed by the user.
    pub fn dismissable(&self) -> bool {
        !matches!(self, Modal::Loading { .. })
    }
}
