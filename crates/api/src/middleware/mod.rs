//! Request extractors guarding authenticated endpoints.
//!
//! - [`auth::AuthUser`] -- Extracts the signed-in account from a JWT Bearer token.

pub mod auth;
