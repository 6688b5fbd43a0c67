//! # Client state and its update function
//!
//! [`ClientState`] is everything the views draw: the session, the cached note list,
//! the auth form tab, the editor, the modal slot, the toast and the activity log.
//! It only changes through [`reduce`], a pure function from the current state and a
//! [`StateEvent`] to the next state. The [`crate::Controller`] owns the state, feeds
//! it events as requests resolve, and hands every new state to its subscribers.
//!
//! ## Lifecycles
//!
//! - Auth: `LoggedOut → SessionStarted → LoggedIn → SessionEnded → LoggedOut`.
//!   Ending a session drops the note cache, the editor and any modal.
//! - Editor: `Closed → EditorOpened → Open → EditorClosed → Closed`.
//!   `EditorRejected` keeps it open with a validation message.

use api::{preview_claims, Note, UserInfo};

use crate::activity_log::{ActivityLog, LogEntry};
use crate::dialog::{EditorState, Modal, NoteDialog};
use crate::toast::Toast;

/// An authenticated session.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

impl Session {
    /// Rebuild a session from a persisted token using its unverified claims.
    /// The user is display data; the service still validates the token.
    pub fn restore(token: String) -> Result<Self, String> {
        let claims = preview_claims(&token)?;
        Ok(Self {
            user: claims.to_user(),
            token,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

/// Top-level screen, derived from the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Auth,
    Notes,
}

/// What the header offers next to the app name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderActions {
    /// "Login / Register" button that brings up the auth forms.
    SignedOut,
    /// The user's email and a logout button.
    SignedIn { email: String },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientState {
    pub session: Option<Session>,
    /// Mirror of the service's note list, in service order.
    pub notes: Vec<Note>,
    pub auth_tab: AuthTab,
    /// Value of the login form's email field.
    pub login_email: String,
    pub editor: EditorState,
    pub modal: Option<Modal>,
    /// Bumped every time a modal is shown.
    pub modal_seq: u64,
    pub toast: Toast,
    pub log: ActivityLog,
}

impl ClientState {
    pub fn view(&self) -> View {
        if self.session.is_some() {
            View::Notes
        } else {
            View::Auth
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn header_actions(&self) -> HeaderActions {
        match self.user() {
            Some(user) => HeaderActions::SignedIn {
                email: user.display_name().to_string(),
            },
            None => HeaderActions::SignedOut,
        }
    }

    pub fn find_note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StateEvent {
    SessionStarted(Session),
    SessionEnded,
    NotesLoaded(Vec<Note>),
    TabSwitched(AuthTab),
    LoginEmailChanged(String),
    EditorOpened(NoteDialog),
    EditorRejected(String),
    EditorClosed,
    ModalShown(Modal),
    ModalDismissed,
    ToastShown(String),
    ToastExpired(u64),
    Logged(LogEntry),
    LogCleared,
    LogToggled,
}

/// Apply one event to the state.
pub fn reduce(mut state: ClientState, event: StateEvent) -> ClientState {
    match event {
        StateEvent::SessionStarted(session) => {
            state.session = Some(session);
        }
        StateEvent::SessionEnded => {
            state.session = None;
            state.notes.clear();
            state.editor = EditorState::Closed;
            state.modal = None;
            state.auth_tab = AuthTab::Login;
        }
        StateEvent::NotesLoaded(notes) => {
            state.notes = notes;
        }
        StateEvent::TabSwitched(tab) => {
            state.auth_tab = tab;
        }
        StateEvent::LoginEmailChanged(email) => {
            state.login_email = email;
        }
        StateEvent::EditorOpened(dialog) => {
            state.editor = EditorState::Open(dialog);
        }
        StateEvent::EditorRejected(message) => {
            if let EditorState::Open(dialog) = &mut state.editor {
                dialog.error = Some(message);
            }
        }
        StateEvent::EditorClosed => {
            state.editor = EditorState::Closed;
        }
        StateEvent::ModalShown(modal) => {
            state.modal = Some(modal);
            state.modal_seq += 1;
        }
        StateEvent::ModalDismissed => {
            state.modal = None;
        }
        StateEvent::ToastShown(message) => {
            state.toast.show(message);
        }
        StateEvent::ToastExpired(generation) => {
            state.toast.expire(generation);
        }
        StateEvent::Logged(entry) => {
            state.log.push(entry);
        }
        StateEvent::LogCleared => {
            state.log.entries.clear();
        }
        StateEvent::LogToggled => {
            state.log.visible = !state.log.visible;
        }
    }
    state
}
