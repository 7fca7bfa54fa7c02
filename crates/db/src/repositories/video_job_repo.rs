//! Repository for the `video_jobs` table.
//!
//! Status values are always bound from `VideoJobStatus`, never as literals.

use sqlx::PgPool;
use veoflow_core::collection::{JobProgress, INITIAL_JOB_STATUS};
use veoflow_core::status::VideoJobStatus;
use veoflow_core::types::DbId;

use crate::error::RepoError;
use crate::models::video_job::{CreateVideoJob, VideoJob, VideoJobListQuery};

/// Column list for `video_jobs` queries.
const COLUMNS: &str = "\
    id, user_id, collection_url, status, \
    total_products, completed_products, failed_products, \
    error_message, metadata, created_at, updated_at";

/// Maximum page size for job listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for job listing.
const DEFAULT_LIMIT: i64 = 50;

/// Provides persistence for video jobs.
pub struct VideoJobRepo;

impl VideoJobRepo {
    /// Record a newly submitted collection as a pending job with zeroed
    /// counters, no error, and empty metadata.
    pub async fn create(pool: &PgPool, input: &CreateVideoJob) -> Result<VideoJob, sqlx::Error> {
        let query = format!(
            "INSERT INTO video_jobs \
                (user_id, collection_url, status, total_products, completed_products, \
                 failed_products, error_message, metadata) \
             VALUES ($1, $2, $3, 0, 0, 0, NULL, '{{}}'::jsonb) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VideoJob>(&query)
            .bind(input.user_id)
            .bind(&input.collection_url)
            .bind(INITIAL_JOB_STATUS.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<VideoJob>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM video_jobs WHERE id = $1");
        sqlx::query_as::<_, VideoJob>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a job only if it belongs to `user_id`.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<VideoJob>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM video_jobs WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, VideoJob>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's jobs, newest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
        params: &VideoJobListQuery,
    ) -> Result<Vec<VideoJob>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = params.offset.unwrap_or(0).max(0);

        let query = format!(
            "SELECT {COLUMNS} FROM video_jobs \
             WHERE user_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, VideoJob>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Move a job to `status`, replacing its error message.
    ///
    /// Completed and failed jobs are left untouched. Returns `None` if no
    /// job with the given id exists or it has already finished.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: VideoJobStatus,
        error_message: Option<&str>,
    ) -> Result<Option<VideoJob>, sqlx::Error> {
        let query = format!(
            "UPDATE video_jobs SET status = $2, error_message = $3 \
             WHERE id = $1 AND status <> ALL($4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VideoJob>(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(error_message)
            .bind(terminal_statuses())
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the product counters after checking
    /// `completed + failed <= total`.
    ///
    /// An invalid `progress` is rejected with [`RepoError::Invalid`] before
    /// any query runs. Returns `None` if no job with the given id exists.
    pub async fn update_progress(
        pool: &PgPool,
        id: DbId,
        progress: &JobProgress,
    ) -> Result<Option<VideoJob>, RepoError> {
        progress.validate()?;

        let query = format!(
            "UPDATE video_jobs SET \
                total_products = $2, completed_products = $3, failed_products = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let job = sqlx::query_as::<_, VideoJob>(&query)
            .bind(id)
            .bind(progress.total)
            .bind(progress.completed)
            .bind(progress.failed)
            .fetch_optional(pool)
            .await?;
        Ok(job)
    }

    /// Delete a job owned by `user_id`. Its products go with it (FK cascade).
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM video_jobs WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn terminal_statuses() -> Vec<&'static str> {
    VideoJobStatus::ALL
        .iter()
        .filter(|s| s.is_terminal())
        .map(|s| s.as_str())
        .collect()
}
