//! Client-side token handling.

mod claims;

pub use claims::{preview_claims, TokenClaims};
