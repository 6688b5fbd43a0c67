//! # Note list renderer
//!
//! Pure functions from notes to HTML. Note text is user input, so every title and
//! content string passes through [`escape_html`] exactly once before it is placed in
//! markup. Notes keep the order the service returned; nothing is sorted here.

use api::Note;

/// Rendered note list: the empty-state placeholder or one card per note.
#[derive(Clone, Debug, PartialEq)]
pub enum NotesMarkup {
    Empty,
    Grid(Vec<CardMarkup>),
}

/// Everything a note card shows.
#[derive(Clone, Debug, PartialEq)]
pub struct CardMarkup {
    /// Note id carried by the edit and delete actions.
    pub id: String,
    /// Escaped title and content markup, see [`note_card_body`].
    pub body: String,
    /// Display form of `updatedAt`, as plain text.
    pub date: String,
}

/// Escape `& < > " '` for use in HTML text and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Format an RFC 3339 timestamp as local `YYYY-MM-DD HH:MM`.
/// Anything unparsable is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(at) => at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Title and content markup of one card.
pub fn note_card_body(note: &Note) -> String {
    format!(
        r#"<h3 class="text-lg font-medium mb-2 text-white">{}</h3><p class="text-gray-400 text-sm mb-4 note-content">{}</p>"#,
        escape_html(&note.title),
        escape_html(&note.content),
    )
}

pub fn note_card(note: &Note) -> CardMarkup {
    CardMarkup {
        id: note.id.clone(),
        body: note_card_body(note),
        date: format_timestamp(&note.updated_at),
    }
}

pub fn render_notes(notes: &[Note]) -> NotesMarkup {
    if notes.is_empty() {
        return NotesMarkup::Empty;
    }
    NotesMarkup::Grid(notes.iter().map(note_card).collect())
}
