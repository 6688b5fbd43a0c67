//! # API crate: typed client for the MiNo notes service
//!
//! Everything the frontends need to talk to the remote notes REST API:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Unverified claims preview of a bearer token (display only) |
//! | [`client`] | The [`NotesApi`] trait and its reqwest-backed [`HttpClient`] |
//! | [`error`] | [`ApiError`]: rejected request, transport failure, unparsable body |
//! | [`models`] | Wire models: [`Note`], [`NoteDraft`], [`UserInfo`], [`Credentials`], envelope |
//!
//! The service itself (token issuance, storage) is external; this crate only
//! consumes it.

pub mod auth;
pub mod client;
pub mod error;
pub mod models;

pub use auth::{preview_claims, TokenClaims};
pub use client::{HttpClient, NotesApi};
pub use error::ApiError;
pub use models::{ApiResponse, AuthResponse, Credentials, Note, NoteDraft, UserInfo};
