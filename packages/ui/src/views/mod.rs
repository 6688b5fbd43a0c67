mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod auth_forms;
pub use auth_forms::{AuthForms, LoginForm, RegisterForm};

mod notes;
pub use notes::{EmptyState, NoteCard, NotesView};

mod note_dialog;
pub use note_dialog::NoteDialogView;

mod dialog_host;
pub use dialog_host::{DialogHost, StatusDialog};

mod toast;
pub use toast::ToastView;
