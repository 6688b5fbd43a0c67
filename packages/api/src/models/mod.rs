//! Wire models for the notes service.

mod note;
mod user;

pub use note::{ApiResponse, Note, NoteDraft};
pub use user::{AuthResponse, Credentials, UserInfo};
