//! Repository for the `profiles` table.

use sqlx::PgPool;
use veoflow_core::types::DbId;

use crate::models::profile::{Profile, UpsertProfile};

const COLUMNS: &str = "id, email, username, first_name, last_name, avatar_url, \
                        created_at, updated_at";

pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a profile, or overwrite the mutable fields of the existing
    /// row with the same id. `avatar_url` is never touched here.
    pub async fn upsert(pool: &PgPool, input: &UpsertProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (id, email, username, first_name, last_name)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (id) DO UPDATE SET
                email = EXCLUDED.email,
                username = EXCLUDED.username,
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(input.id)
            .bind(&input.email)
            .bind(&input.username)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
