use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    veoflow_db::health_check(&pool).await.unwrap();

    for table in ["auth_users", "profiles", "video_jobs", "products"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The updated_at trigger bumps the timestamp on UPDATE.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_updated_at_trigger(pool: PgPool) {
    let (id, inserted_at): (uuid::Uuid, chrono::DateTime<chrono::Utc>) = sqlx::query_as(
        "INSERT INTO auth_users (email, password_hash) VALUES ('t@example.com', 'x') \
         RETURNING id, updated_at",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let (updated_at,): (chrono::DateTime<chrono::Utc>,) =
        sqlx::query_as("UPDATE auth_users SET password_hash = 'y' WHERE id = $1 RETURNING updated_at")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert!(updated_at >= inserted_at);
}

/// Unknown status strings are rejected by the CHECK constraint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_check_constraint(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO video_jobs (collection_url, status) VALUES ('https://example.com', 'cancelled')",
    )
    .execute(&pool)
    .await;

    let err = result.expect_err("unknown status must be rejected");
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.constraint(), Some("ck_video_jobs_status"));
}
