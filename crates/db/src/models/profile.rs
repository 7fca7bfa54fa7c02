//! Profile model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use veoflow_core::types::{DbId, Timestamp};

/// A row from the `profiles` table. `id` is the owning account's id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub email: String,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting or refreshing a profile keyed by account id.
#[derive(Debug)]
pub struct UpsertProfile {
    pub id: DbId,
    pub email: String,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
