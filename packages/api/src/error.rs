//! Errors returned by [`crate::NotesApi`] calls.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The service answered with a non-2xx status or `success: false`.
    #[error("Request rejected ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// The configured base URL cannot carry a note path.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// The server-provided message, if the service sent a non-empty one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Pick the text shown to the user.
    ///
    /// Rejections surface the server message verbatim, or `rejected` when the
    /// service sent none. Transport, parse and URL failures always use `unreachable`.
    pub fn user_message(&self, rejected: &str, unreachable: &str) -> String {
        match self {
            ApiError::Rejected { .. } => self.server_message().unwrap_or(rejected).to_string(),
            ApiError::Transport(_) | ApiError::InvalidResponse(_) | ApiError::InvalidUrl(_) => {
                unreachable.to_string()
            }
        }
    }
}
