//! Repository for the `auth_users` table.

use sqlx::PgPool;
use veoflow_core::types::DbId;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, user_metadata, email_confirmed_at, \
                        created_at, updated_at";

/// Unique constraint guarding `auth_users.email`.
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "uq_auth_users_email";

/// Provides account persistence.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new unconfirmed account, returning the created row.
    ///
    /// Fails with a unique violation on [`EMAIL_UNIQUE_CONSTRAINT`] when the
    /// email is already registered.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO auth_users (email, password_hash, user_metadata)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.user_metadata)
            .fetch_one(pool)
            .await
    }

    /// Find an account by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM auth_users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an account by email. Emails are stored normalized, so callers
    /// should pass the normalized form.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM auth_users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Mark the account's email as confirmed. Confirming twice keeps the
    /// original timestamp.
    ///
    /// Returns `true` if the account exists.
    pub async fn confirm_email(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE auth_users
             SET email_confirmed_at = COALESCE(email_confirmed_at, NOW())
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
