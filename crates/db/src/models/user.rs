//! Account model (`auth_users`) and DTOs.

use sqlx::FromRow;
use veoflow_core::types::{DbId, Timestamp};

/// Full account row from the `auth_users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    /// Sign-up extras: `first_name`, `last_name`, `username`.
    pub user_metadata: serde_json::Value,
    pub email_confirmed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    pub fn is_email_confirmed(&self) -> bool {
        self.email_confirmed_at.is_some()
    }
}

/// DTO for creating a new, unconfirmed account.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub user_metadata: serde_json::Value,
}
