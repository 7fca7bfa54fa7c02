//! Handlers for the `/jobs` resource backing the dashboard.
//!
//! All endpoints require authentication via [`AuthUser`] and only ever see
//! the caller's own jobs. Another user's job is reported as not found.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use veoflow_core::error::CoreError;
use veoflow_core::status::VideoJobStatus;
use veoflow_core::types::DbId;
use veoflow_db::models::product::Product;
use veoflow_db::models::video_job::{VideoJob, VideoJobListQuery};
use veoflow_db::repositories::{ProductRepo, VideoJobRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// A job together with its products.
#[derive(Debug, Serialize)]
pub struct JobDetail {
    pub job: VideoJob,
    pub products: Vec<Product>,
    pub progress: ProgressSummary,
}

/// Derived progress figures for the dashboard.
#[derive(Debug, Serialize)]
pub struct ProgressSummary {
    /// Products neither completed nor failed yet.
    pub remaining_products: i32,
    /// Every product has been completed or failed.
    pub all_products_settled: bool,
    /// The job is completed or failed and will not change again.
    pub finished: bool,
}

impl ProgressSummary {
    fn of(job: &VideoJob) -> Self {
        let progress = job.progress();
        Self {
            remaining_products: progress.remaining(),
            all_products_settled: progress.is_finished(),
            finished: job.status().is_some_and(VideoJobStatus::is_terminal),
        }
    }
}

/// GET /api/jobs
///
/// List the caller's jobs, newest first. Supports `limit` and `offset`.
pub async fn list_jobs(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<VideoJobListQuery>,
) -> AppResult<Json<DataResponse<Vec<VideoJob>>>> {
    let jobs = VideoJobRepo::list_by_user(&state.pool, auth.user_id, &params).await?;
    Ok(Json(DataResponse { data: jobs }))
}

/// GET /api/jobs/{id}
pub async fn get_job(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(job_id): Path<DbId>,
) -> AppResult<Json<DataResponse<JobDetail>>> {
    let job = VideoJobRepo::find_for_user(&state.pool, job_id, auth.user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Video job", job_id))?;

    let products = ProductRepo::list_by_job(&state.pool, job.id).await?;

    let progress = ProgressSummary::of(&job);
    Ok(Json(DataResponse {
        data: JobDetail {
            job,
            products,
            progress,
        },
    }))
}

/// DELETE /api/jobs/{id}
///
/// Delete one of the caller's jobs and, by cascade, its products.
pub async fn delete_job(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(job_id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !VideoJobRepo::delete(&state.pool, job_id, auth.user_id).await? {
        return Err(CoreError::not_found("Video job", job_id).into());
    }

    tracing::info!(job_id = %job_id, user_id = %auth.user_id, "Video job deleted");
    Ok(StatusCode::NO_CONTENT)
}
