//! This crate contains all shared UI for the MiNo client.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`state`] | [`ClientState`] and the pure [`state::reduce`] update function. |
//! | [`controller`] | [`Controller`]: session, notes and notification operations. |
//! | [`render`] | Escaping note renderer and timestamp formatting. |
//! | [`dialog`] | Editor and modal models. |
//! | [`toast`] | Single overwriting toast. |
//! | [`activity_log`] | In-app activity log entries. |
//! | [`views`] | Dioxus components drawing the state. |

use dioxus::prelude::*;

pub mod activity_log;
pub use activity_log::{ActivityLog, LogEntry, LogLevel};

pub mod controller;
pub use controller::Controller;

pub mod dialog;
pub use dialog::{EditorMode, EditorState, Modal, NoteDialog};

pub mod render;
pub use render::{escape_html, format_timestamp, render_notes, CardMarkup, NotesMarkup};

pub mod state;
pub use state::{AuthTab, ClientState, HeaderActions, Session, StateEvent, View};

pub mod toast;
pub use toast::Toast;

mod platform;
pub use platform::{load_config, make_controller, make_token_store, AppController, PlatformTokenStore};

pub mod views;

pub const VIEWS_CSS: Asset = asset!("/src/views/views.css");

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{use_client_state, use_controller, ClientProvider};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
