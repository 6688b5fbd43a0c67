//! # Client controller
//!
//! [`Controller`] drives the whole client: it owns the [`ClientState`], talks to the
//! notes service through a [`NotesApi`], persists the token through a
//! [`TokenStore`], and publishes every new state to its subscribers (the Dioxus
//! views subscribe a signal).
//!
//! ## Rules
//!
//! - State changes only through [`reduce`]; the `RefCell` is never borrowed across an
//!   `.await`.
//! - Each user action issues at most one mutating request, awaited before the state
//!   moves on. Subscribers see the new state after the request resolved.
//! - After a successful create, update or delete the note list is fetched again;
//!   the cache is never patched locally.
//! - Failures never escape: each ends as a toast or a failure dialog.
//! - Subscribers must not call back into the controller synchronously.

use std::cell::RefCell;
use std::rc::Rc;

use api::{Credentials, NotesApi};
use store::config::NotificationConfig;
use store::TokenStore;

use crate::activity_log::{trace_entry, LogEntry, LogLevel};
use crate::dialog::{EditorMode, Modal, NoteDialog};
use crate::state::{reduce, AuthTab, ClientState, Session, StateEvent};

type Subscriber = Box<dyn FnMut(&ClientState)>;

pub struct Controller<A, S> {
    api: A,
    store: S,
    notifications: NotificationConfig,
    state: Rc<RefCell<ClientState>>,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl<A: Clone, S: Clone> Clone for Controller<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            store: self.store.clone(),
            notifications: self.notifications.clone(),
            state: self.state.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

/// Controllers compare by identity so they can live in Dioxus context and props.
impl<A, S> PartialEq for Controller<A, S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<A: NotesApi, S: TokenStore> Controller<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            notifications: NotificationConfig::default(),
            state: Rc::default(),
            subscribers: Rc::default(),
        }
    }

    pub fn with_notifications(mut self, notifications: NotificationConfig) -> Self {
        self.notifications = notifications;
        self
    }

    pub fn notifications(&self) -> &NotificationConfig {
        &self.notifications
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ClientState {
        self.state.borrow().clone()
    }

    /// Register a callback run after every state change.
    pub fn subscribe(&self, subscriber: impl FnMut(&ClientState) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    fn dispatch(&self, event: StateEvent) {
        let current = std::mem::take(&mut *self.state.borrow_mut());
        let next = reduce(current, event);
        *self.state.borrow_mut() = next;

        let state = self.state.borrow();
        for subscriber in self.subscribers.borrow_mut().iter_mut() {
            subscriber(&state);
        }
    }

    fn log(&self, level: LogLevel, message: impl Into<String>) {
        let entry = LogEntry::now(level, message);
        trace_entry(&entry);
        self.dispatch(StateEvent::Logged(entry));
    }

    fn toast(&self, level: LogLevel, message: impl Into<String>) {
        let message = message.into();
        self.log(level, message.clone());
        self.dispatch(StateEvent::ToastShown(message));
    }

    fn token(&self) -> Option<String> {
        self.state.borrow().token().map(str::to_string)
    }

    // ---- Session ----

    /// Restore a persisted session at startup.
    ///
    /// No stored token leaves the auth view up. A token whose payload cannot be
    /// decoded is handled as a logout.
    pub async fn restore(&self) {
        let Some(token) = self.store.load().await else {
            tracing::debug!("No stored token, showing auth forms");
            return;
        };

        match Session::restore(token) {
            Ok(session) => {
                self.log(
                    LogLevel::Info,
                    format!("Restored session for {}", session.user.email),
                );
                self.dispatch(StateEvent::SessionStarted(session));
                self.refresh_notes().await;
            }
            Err(e) => {
                self.log(LogLevel::Warning, format!("Discarding stored token: {e}"));
                self.logout().await;
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) {
        let credentials = Credentials::new(email, password);
        match self.api.login(&credentials).await {
            Ok(auth) => {
                self.store.save(&auth.token).await;
                self.dispatch(StateEvent::SessionStarted(Session {
                    token: auth.token,
                    user: auth.user,
                }));
                self.toast(LogLevel::Success, "Logged in successfully");
                self.refresh_notes().await;
            }
            Err(e) => {
                tracing::warn!("Login failed: {}", e);
                self.toast(
                    LogLevel::Error,
                    e.user_message("Login failed", "Login failed. Please try again."),
                );
            }
        }
    }

    pub async fn register(&self, email: &str, password: &str, confirm: &str) {
        if password != confirm {
            self.toast(LogLevel::Warning, "Passwords do not match");
            return;
        }

        let credentials = Credentials::new(email, password);
        match self.api.register(&credentials).await {
            Ok(_) => {
                self.toast(
                    LogLevel::Success,
                    "Registration successful! You can now log in.",
                );
                self.dispatch(StateEvent::TabSwitched(AuthTab::Login));
                self.dispatch(StateEvent::LoginEmailChanged(email.to_string()));
            }
            Err(e) => {
                tracing::warn!("Registration failed: {}", e);
                self.toast(
                    LogLevel::Error,
                    e.user_message(
                        "Registration failed",
                        "Registration failed. Please try again.",
                    ),
                );
            }
        }
    }

    pub async fn logout(&self) {
        self.store.clear().await;
        self.dispatch(StateEvent::SessionEnded);
        self.toast(LogLevel::Info, "Logged out successfully");
    }

    pub fn switch_tab(&self, tab: AuthTab) {
        self.dispatch(StateEvent::TabSwitched(tab));
    }

    pub fn set_login_email(&self, email: String) {
        self.dispatch(StateEvent::LoginEmailChanged(email));
    }

    // ---- Notes ----

    /// Replace the note cache with the service's list. Returns whether it succeeded.
    pub async fn refresh_notes(&self) -> bool {
        let Some(token) = self.token() else {
            return false;
        };

        match self.api.list_notes(&token).await {
            Ok(notes) => {
                tracing::debug!(count = notes.len(), "Loaded notes");
                self.dispatch(StateEvent::NotesLoaded(notes));
                true
            }
            Err(e) => {
                tracing::warn!("Fetching notes failed: {}", e);
                self.toast(
                    LogLevel::Error,
                    e.user_message("Failed to fetch notes", "Failed to fetch notes"),
                );
                false
            }
        }
    }

    pub fn open_new_note(&self) {
        self.dispatch(StateEvent::EditorOpened(NoteDialog::create()));
    }

    /// Open the editor on a cached note. Unknown ids are ignored.
    pub fn open_edit_note(&self, id: &str) {
        let dialog = self.state.borrow().find_note(id).map(NoteDialog::edit);
        match dialog {
            Some(dialog) => self.dispatch(StateEvent::EditorOpened(dialog)),
            None => tracing::debug!(note_id = id, "Edit requested for unknown note"),
        }
    }

    pub fn close_editor(&self) {
        self.dispatch(StateEvent::EditorClosed);
    }

    /// Validate and save the open editor's form.
    pub async fn submit_editor(&self, title: &str, content: &str) {
        let Some(dialog) = self.state.borrow().editor.dialog().cloned() else {
            return;
        };
        let draft = match dialog.validate(title, content) {
            Ok(draft) => draft,
            Err(message) => {
                self.dispatch(StateEvent::EditorRejected(message));
                return;
            }
        };
        let Some(token) = self.token() else {
            return;
        };

        self.dispatch(StateEvent::EditorClosed);
        let creating = dialog.is_new();
        self.dispatch(StateEvent::ModalShown(Modal::Loading {
            title: if creating {
                "Creating note..."
            } else {
                "Updating note..."
            }
            .to_string(),
        }));

        let result = match &dialog.mode {
            EditorMode::Create => self.api.create_note(&token, &draft).await,
            EditorMode::Edit(id) => self.api.update_note(&token, id, &draft).await,
        };

        match result {
            Ok(note) => {
                self.refresh_notes().await;
                let title = if creating {
                    "Note created successfully!"
                } else {
                    "Note updated successfully!"
                };
                self.log(LogLevel::Success, format!("{title} ({})", note.id));
                self.dispatch(StateEvent::ModalShown(Modal::Success {
                    title: title.to_string(),
                    text: None,
                }));
            }
            Err(e) => {
                tracing::error!("Save note error: {}", e);
                let text = e.user_message(
                    "Failed to save note",
                    "Failed to save note. Please try again.",
                );
                self.log(LogLevel::Error, text.clone());
                self.dispatch(StateEvent::ModalShown(Modal::Failure { text }));
            }
        }
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&self, id: &str) {
        self.dispatch(StateEvent::ModalShown(Modal::ConfirmDelete {
            note_id: id.to_string(),
        }));
    }

    /// Delete the note awaiting confirmation.
    pub async fn confirm_delete(&self) {
        let note_id = match &self.state.borrow().modal {
            Some(Modal::ConfirmDelete { note_id }) => note_id.clone(),
            _ => return,
        };
        let Some(token) = self.token() else {
            return;
        };

        self.dispatch(StateEvent::ModalShown(Modal::Loading {
            title: "Deleting note...".to_string(),
        }));

        match self.api.delete_note(&token, &note_id).await {
            Ok(()) => {
                self.refresh_notes().await;
                self.log(LogLevel::Success, format!("Deleted note {note_id}"));
                self.dispatch(StateEvent::ModalShown(Modal::Success {
                    title: "Deleted!".to_string(),
                    text: Some("Your note has been deleted.".to_string()),
                }));
            }
            Err(e) => {
                tracing::error!(note_id = note_id.as_str(), "Delete note error: {}", e);
                let text = e.user_message(
                    "Failed to delete note",
                    "Failed to delete note. Please try again.",
                );
                self.log(LogLevel::Error, text.clone());
                self.dispatch(StateEvent::ModalShown(Modal::Failure { text }));
            }
        }
    }

    // ---- Notifications ----

    /// Close the current modal unless it is a loading dialog.
    pub fn dismiss_modal(&self) {
        let dismissable = self
            .state
            .borrow()
            .modal
            .as_ref()
            .is_some_and(Modal::dismissable);
        if dismissable {
            self.dispatch(StateEvent::ModalDismissed);
        }
    }

    /// Close the modal shown as number `seq`, if it is still the one on screen.
    pub fn expire_modal(&self, seq: u64) {
        let current = {
            let state = self.state.borrow();
            state.modal.is_some() && state.modal_seq == seq
        };
        if current {
            self.dispatch(StateEvent::ModalDismissed);
        }
    }

    pub fn expire_toast(&self, generation: u64) {
        self.dispatch(StateEvent::ToastExpired(generation));
    }

    pub fn toggle_log(&self) {
        self.dispatch(StateEvent::LogToggled);
    }

    pub fn clear_log(&self) {
        self.dispatch(StateEvent::LogCleared);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use api::{ApiError, AuthResponse, Note, NoteDraft, UserInfo};
    use store::MemoryStore;

    use crate::state::View;

    const TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJ1c2VySWQiOiJ1MSIsImVtYWlsIjoiYWRhQGV4YW1wbGUuY29tIiwiaXNzIjoibWluby1hcHAifQ.c2ln";

    /// Scripted stand-in for the notes service.
    #[derive(Default)]
    struct FakeService {
        password: String,
        notes: Vec<Note>,
        next_id: u32,
        /// Next request is rejected with this message.
        reject_next: Option<Option<String>>,
        /// Next request fails as if the body were unreadable.
        garble_next: bool,
        requests: Vec<String>,
    }

    #[derive(Clone, Default)]
    struct FakeApi(Rc<RefCell<FakeService>>);

    impl FakeApi {
        fn with_password(password: &str) -> Self {
            let api = Self::default();
            api.0.borrow_mut().password = password.to_string();
            api
        }

        fn seed(&self, notes: Vec<Note>) {
            self.0.borrow_mut().notes = notes;
        }

        fn reject_next(&self, message: Option<&str>) {
            self.0.borrow_mut().reject_next = Some(message.map(str::to_string));
        }

        fn garble_next(&self) {
            self.0.borrow_mut().garble_next = true;
        }

        fn requests(&self) -> Vec<String> {
            self.0.borrow().requests.clone()
        }

        fn server_notes(&self) -> Vec<Note> {
            self.0.borrow().notes.clone()
        }

        fn begin(&self, request: String) -> Result<(), ApiError> {
            let mut svc = self.0.borrow_mut();
            svc.requests.push(request);
            if let Some(message) = svc.reject_next.take() {
                return Err(ApiError::Rejected {
                    status: 400,
                    message,
                });
            }
            if std::mem::take(&mut svc.garble_next) {
                return Err(ApiError::InvalidResponse("expected value".to_string()));
            }
            Ok(())
        }

        fn check_token(token: &str) -> Result<(), ApiError> {
            if token == TOKEN {
                Ok(())
            } else {
                Err(ApiError::Rejected {
                    status: 401,
                    message: Some("Invalid token".to_string()),
                })
            }
        }
    }

    impl NotesApi for FakeApi {
        async fn register(&self, credentials: &Credentials) -> Result<String, ApiError> {
            self.begin(format!("register {}", credentials.email))?;
            Ok("User registered successfully".to_string())
        }

        async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
            self.begin(format!("auth {}", credentials.email))?;
            if credentials.password != self.0.borrow().password {
                return Err(ApiError::Rejected {
                    status: 401,
                    message: Some("Invalid email or password".to_string()),
                });
            }
            Ok(AuthResponse {
                token: TOKEN.to_string(),
                user: UserInfo {
                    id: "u1".to_string(),
                    email: credentials.email.clone(),
                    created_at: None,
                },
            })
        }

        async fn list_notes(&self, token: &str) -> Result<Vec<Note>, ApiError> {
            self.begin("GET notes".to_string())?;
            Self::check_token(token)?;
            Ok(self.0.borrow().notes.clone())
        }

        async fn create_note(&self, token: &str, draft: &NoteDraft) -> Result<Note, ApiError> {
            self.begin("POST notes".to_string())?;
            Self::check_token(token)?;
            let mut svc = self.0.borrow_mut();
            svc.next_id += 1;
            let note = Note {
                id: format!("n{}", svc.next_id),
                user_id: "u1".to_string(),
                title: draft.title.clone(),
                content: draft.content.clone(),
                created_at: "2024-01-01T00:00:00Z".to_string(),
                updated_at: "2024-01-01T00:00:00Z".to_string(),
            };
            svc.notes.push(note.clone());
            Ok(note)
        }

        async fn update_note(
            &self,
            token: &str,
            id: &str,
            draft: &NoteDraft,
        ) -> Result<Note, ApiError> {
            self.begin(format!("PUT notes/{id}"))?;
            Self::check_token(token)?;
            let mut svc = self.0.borrow_mut();
            let note = svc
                .notes
                .iter_mut()
                .find(|n| n.id == id)
                .ok_or(ApiError::Rejected {
                    status: 400,
                    message: Some("note not found".to_string()),
                })?;
            note.title = draft.title.clone();
            note.content = draft.content.clone();
            Ok(note.clone())
        }

        async fn delete_note(&self, token: &str, id: &str) -> Result<(), ApiError> {
            self.begin(format!("DELETE notes/{id}"))?;
            Self::check_token(token)?;
            self.0.borrow_mut().notes.retain(|n| n.id != id);
            Ok(())
        }
    }

    fn note(id: &str, title: &str) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn logged_out() -> (Controller<FakeApi, MemoryStore>, FakeApi, MemoryStore) {
        let api = FakeApi::with_password("secret");
        let store = MemoryStore::default();
        (Controller::new(api.clone(), store.clone()), api, store)
    }

    async fn logged_in(notes: Vec<Note>) -> (Controller<FakeApi, MemoryStore>, FakeApi) {
        let api = FakeApi::with_password("secret");
        api.seed(notes);
        let controller = Controller::new(api.clone(), MemoryStore::with_token("token", TOKEN));
        controller.restore().await;
        (controller, api)
    }

    #[tokio::test]
    async fn test_login_stores_token_and_loads_notes() {
        let (controller, api, store) = logged_out();
        api.seed(vec![note("n1", "First")]);

        controller.login("ada@example.com", "secret").await;

        let state = controller.state();
        assert_eq!(state.view(), View::Notes);
        assert_eq!(store.current().as_deref(), Some(TOKEN));
        assert_eq!(state.user().unwrap().email, "ada@example.com");
        assert_eq!(state.notes, api.server_notes());
        assert_eq!(state.toast.message, "Logged in successfully");
        assert_eq!(api.requests(), vec!["auth ada@example.com", "GET notes"]);
    }

    #[tokio::test]
    async fn test_invalid_login_leaves_token_unset() {
        let (controller, api, store) = logged_out();

        controller.login("ada@example.com", "wrong").await;

        let state = controller.state();
        assert_eq!(state.view(), View::Auth);
        assert!(store.current().is_none());
        assert!(state.toast.visible);
        assert_eq!(state.toast.message, "Invalid email or password");
        assert_eq!(api.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_login_failure_without_message() {
        let (controller, api, _) = logged_out();
        api.reject_next(None);
        controller.login("ada@example.com", "secret").await;
        assert_eq!(controller.state().toast.message, "Login failed");

        api.garble_next();
        controller.login("ada@example.com", "secret").await;
        assert_eq!(
            controller.state().toast.message,
            "Login failed. Please try again."
        );
    }

    #[tokio::test]
    async fn test_register_password_mismatch_sends_nothing() {
        let (controller, api, _) = logged_out();

        controller.register("new@example.com", "a", "b").await;

        assert_eq!(controller.state().toast.message, "Passwords do not match");
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn test_register_switches_to_prefilled_login() {
        let (controller, api, _) = logged_out();
        controller.switch_tab(AuthTab::Register);

        controller.register("new@example.com", "pw", "pw").await;

        let state = controller.state();
        assert_eq!(state.auth_tab, AuthTab::Login);
        assert_eq!(state.login_email, "new@example.com");
        assert_eq!(
            state.toast.message,
            "Registration successful! You can now log in."
        );
        assert_eq!(api.requests(), vec!["register new@example.com"]);
    }

    #[tokio::test]
    async fn test_register_rejected_shows_server_message() {
        let (controller, api, _) = logged_out();
        api.reject_next(Some("user already exists"));

        controller.register("ada@example.com", "pw", "pw").await;

        let state = controller.state();
        assert_eq!(state.toast.message, "user already exists");
        assert_eq!(state.login_email, "");
    }

    #[tokio::test]
    async fn test_logout_clears_store_and_state() {
        let (controller, api, store) = logged_out();
        api.seed(vec![note("n1", "First")]);
        controller.login("ada@example.com", "secret").await;

        controller.logout().await;

        let state = controller.state();
        assert_eq!(state.view(), View::Auth);
        assert!(state.notes.is_empty());
        assert!(store.current().is_none());
        assert_eq!(state.toast.message, "Logged out successfully");

        // A fresh start with the same storage stays logged out.
        let reloaded = Controller::new(api.clone(), store.clone());
        reloaded.restore().await;
        assert_eq!(reloaded.state().view(), View::Auth);
    }

    #[tokio::test]
    async fn test_restore_without_token_shows_auth() {
        let (controller, api, _) = logged_out();
        controller.restore().await;
        assert_eq!(controller.state().view(), View::Auth);
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn test_restore_decodes_claims_and_fetches() {
        let (controller, api) = logged_in(vec![note("n1", "First")]).await;
        let state = controller.state();
        assert_eq!(state.view(), View::Notes);
        assert_eq!(state.user().unwrap().id, "u1");
        assert_eq!(state.user().unwrap().email, "ada@example.com");
        assert_eq!(state.notes.len(), 1);
        assert_eq!(api.requests(), vec!["GET notes"]);
    }

    #[tokio::test]
    async fn test_restore_malformed_token_logs_out() {
        let api = FakeApi::with_password("secret");
        let store = MemoryStore::with_token("token", "not-a-jwt");
        let controller = Controller::new(api.clone(), store.clone());

        controller.restore().await;

        let state = controller.state();
        assert_eq!(state.view(), View::Auth);
        assert_eq!(state.toast.message, "Logged out successfully");
        assert!(store.current().is_none());
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_refetches_and_renders_escaped() {
        let (controller, api) = logged_in(vec![]).await;

        controller.open_new_note();
        assert!(controller.state().editor.is_open());
        controller.submit_editor("A&B", "").await;

        let state = controller.state();
        assert!(!state.editor.is_open());
        assert_eq!(state.notes, api.server_notes());
        assert_eq!(
            state.modal,
            Some(Modal::Success {
                title: "Note created successfully!".to_string(),
                text: None,
            })
        );
        assert_eq!(
            api.requests(),
            vec!["GET notes", "POST notes", "GET notes"]
        );

        let crate::render::NotesMarkup::Grid(cards) = crate::render::render_notes(&state.notes)
        else {
            panic!("expected grid");
        };
        assert_eq!(cards.len(), 1);
        assert!(cards[0].body.contains(">A&amp;B</h3>"));
        assert!(cards[0].body.contains(r#"note-content"></p>"#));
    }

    #[tokio::test]
    async fn test_blank_title_keeps_editor_open() {
        let (controller, api) = logged_in(vec![]).await;

        controller.open_new_note();
        controller.submit_editor("", "content").await;

        let state = controller.state();
        let dialog = state.editor.dialog().unwrap();
        assert_eq!(dialog.error.as_deref(), Some("Title is required"));
        assert_eq!(api.requests(), vec!["GET notes"]);
    }

    #[tokio::test]
    async fn test_update_refetches() {
        let (controller, api) = logged_in(vec![note("n1", "Old"), note("n2", "Other")]).await;

        controller.open_edit_note("n1");
        let dialog = controller.state().editor.dialog().cloned().unwrap();
        assert_eq!(dialog.title, "Old");

        controller.submit_editor("New", "body").await;

        let state = controller.state();
        assert_eq!(state.notes, api.server_notes());
        assert_eq!(state.find_note("n1").unwrap().title, "New");
        assert_eq!(state.modal.as_ref().unwrap().title(), "Note updated successfully!");
        assert!(api.requests().contains(&"PUT notes/n1".to_string()));
    }

    #[tokio::test]
    async fn test_edit_unknown_note_is_noop() {
        let (controller, _) = logged_in(vec![note("n1", "Only")]).await;
        controller.open_edit_note("missing");
        assert!(!controller.state().editor.is_open());
    }

    #[tokio::test]
    async fn test_save_failure_shows_dialog() {
        let (controller, api) = logged_in(vec![]).await;
        controller.open_new_note();
        api.garble_next();

        controller.submit_editor("Title", "").await;

        let state = controller.state();
        assert_eq!(
            state.modal,
            Some(Modal::Failure {
                text: "Failed to save note. Please try again.".to_string()
            })
        );
        assert!(state.notes.is_empty());
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let (controller, api) = logged_in(vec![note("n1", "First"), note("n2", "Second")]).await;

        controller.request_delete("n1");
        assert_eq!(api.requests(), vec!["GET notes"]);

        controller.dismiss_modal();
        controller.confirm_delete().await;
        assert_eq!(api.requests(), vec!["GET notes"]);
        assert_eq!(controller.state().notes.len(), 2);

        controller.request_delete("n1");
        controller.confirm_delete().await;

        let state = controller.state();
        assert_eq!(state.notes, api.server_notes());
        assert_eq!(state.notes.len(), 1);
        assert_eq!(state.notes[0].id, "n2");
        assert_eq!(state.modal.as_ref().unwrap().title(), "Deleted!");
        assert_eq!(
            api.requests(),
            vec!["GET notes", "DELETE notes/n1", "GET notes"]
        );
    }

    #[tokio::test]
    async fn test_delete_rejected_keeps_list() {
        let (controller, api) = logged_in(vec![note("n1", "First")]).await;
        let before = controller.state().notes;

        controller.request_delete("n1");
        api.reject_next(Some("not found"));
        controller.confirm_delete().await;

        let state = controller.state();
        assert_eq!(state.notes, before);
        assert_eq!(
            state.modal,
            Some(Modal::Failure {
                text: "not found".to_string()
            })
        );
        // No refetch after a failed delete.
        assert_eq!(api.requests(), vec!["GET notes", "DELETE notes/n1"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_message() {
        let (controller, api) = logged_in(vec![note("n1", "First")]).await;
        api.reject_next(Some("Invalid token"));

        assert!(!controller.refresh_notes().await);

        let state = controller.state();
        assert_eq!(state.toast.message, "Invalid token");
        assert_eq!(state.notes.len(), 1);
    }

    #[tokio::test]
    async fn test_loading_dialog_not_dismissable() {
        let (controller, _) = logged_in(vec![]).await;
        controller.dispatch(StateEvent::ModalShown(Modal::Loading {
            title: "Deleting note...".to_string(),
        }));
        controller.dismiss_modal();
        assert!(controller.state().modal.is_some());
    }

    #[tokio::test]
    async fn test_expire_modal_only_hits_current() {
        let (controller, _) = logged_in(vec![note("n1", "First")]).await;
        controller.request_delete("n1");
        let stale = controller.state().modal_seq;
        controller.request_delete("n1");

        controller.expire_modal(stale);
        assert!(controller.state().modal.is_some());

        controller.expire_modal(stale + 1);
        assert!(controller.state().modal.is_none());
    }

    #[tokio::test]
    async fn test_subscribers_see_each_change() {
        let (controller, _, _) = logged_out();
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let last_tab = Rc::new(Cell::new(AuthTab::Login));
        let tab = last_tab.clone();
        controller.subscribe(move |state| {
            seen.set(seen.get() + 1);
            tab.set(state.auth_tab);
        });

        controller.switch_tab(AuthTab::Register);

        assert_eq!(calls.get(), 1);
        assert_eq!(last_tab.get(), AuthTab::Register);
    }

    #[tokio::test]
    async fn test_activity_log_records_outcomes() {
        let (controller, _, _) = logged_out();
        controller.login("ada@example.com", "wrong").await;

        let state = controller.state();
        assert!(state.log.has_errors());
        controller.toggle_log();
        assert!(controller.state().log.visible);
        controller.clear_log();
        assert!(controller.state().log.entries.is_empty());
    }

    #[tokio::test]
    async fn test_register_failure_fallbacks() {
        let (controller, api, _) = logged_out();

        api.reject_next(None);
        controller.register("new@example.com", "pw", "pw").await;
        assert_eq!(controller.state().toast.message, "Registration failed");

        api.garble_next();
        controller.register("new@example.com", "pw", "pw").await;
        let state = controller.state();
        assert_eq!(state.toast.message, "Registration failed. Please try again.");
        assert_eq!(state.login_email, "");
    }

    #[tokio::test]
    async fn test_fetch_failure_fallbacks() {
        let (controller, api) = logged_in(vec![note("n1", "First")]).await;

        api.garble_next();
        assert!(!controller.refresh_notes().await);
        assert_eq!(controller.state().toast.message, "Failed to fetch notes");

        api.reject_next(None);
        assert!(!controller.refresh_notes().await);
        let state = controller.state();
        assert_eq!(state.toast.message, "Failed to fetch notes");
        assert_eq!(state.notes.len(), 1);
    }

    #[tokio::test]
    async fn test_save_rejection_without_message() {
        let (controller, api) = logged_in(vec![note("n1", "Old")]).await;
        controller.open_edit_note("n1");
        api.reject_next(None);

        controller.submit_editor("New", "").await;

        let state = controller.state();
        assert_eq!(
            state.modal,
            Some(Modal::Failure {
                text: "Failed to save note".to_string()
            })
        );
        assert_eq!(state.find_note("n1").unwrap().title, "Old");
    }

    #[tokio::test]
    async fn test_delete_failure_fallbacks() {
        let (controller, api) = logged_in(vec![note("n1", "First")]).await;

        controller.request_delete("n1");
        api.reject_next(None);
        controller.confirm_delete().await;
        assert_eq!(
            controller.state().modal,
            Some(Modal::Failure {
                text: "Failed to delete note".to_string()
            })
        );

        controller.dismiss_modal();
        controller.request_delete("n1");
        api.garble_next();
        controller.confirm_delete().await;

        let state = controller.state();
        assert_eq!(
            state.modal,
            Some(Modal::Failure {
                text: "Failed to delete note. Please try again.".to_string()
            })
        );
        assert_eq!(state.notes, api.server_notes());
        assert_eq!(state.notes.len(), 1);
    }

    #[tokio::test]
    async fn test_whitespace_title_is_saved() {
        let (controller, api) = logged_in(vec![]).await;

        controller.open_new_note();
        controller.submit_editor("   ", "body").await;

        let state = controller.state();
        assert!(!state.editor.is_open());
        assert_eq!(state.notes, api.server_notes());
        assert_eq!(state.notes[0].title, "   ");
    }
}
