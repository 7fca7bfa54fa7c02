//! Handler for `POST /process-collection`.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use veoflow_core::collection::{validate_collection_url, PROCESSING_STARTED_MESSAGE};
use veoflow_core::types::{DbId, Timestamp};
use veoflow_db::models::video_job::{CreateVideoJob, VideoJob};
use veoflow_db::repositories::VideoJobRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /process-collection`.
#[derive(Debug, Deserialize)]
pub struct ProcessCollectionRequest {
    pub url: Option<String>,
}

/// Summary of the recorded job.
#[derive(Debug, Serialize)]
pub struct JobSummary {
    pub id: DbId,
    pub status: String,
    pub collection_url: String,
    pub created_at: Timestamp,
}

impl From<VideoJob> for JobSummary {
    fn from(job: VideoJob) -> Self {
        Self {
            id: job.id,
            status: job.status,
            collection_url: job.collection_url,
            created_at: job.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProcessCollectionResponse {
    pub success: bool,
    pub job: JobSummary,
    pub message: &'static str,
}

/// POST /api/process-collection
///
/// Record a pending video job for the submitted collection URL. Nothing is
/// processed here; the job stays `pending` until a runner picks it up.
pub async fn process_collection(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<ProcessCollectionRequest>,
) -> AppResult<Json<ProcessCollectionResponse>> {
    let url = validate_collection_url(input.url.as_deref())?;

    let job = VideoJobRepo::create(
        &state.pool,
        &CreateVideoJob {
            user_id: auth.user_id,
            collection_url: url.as_str().to_string(),
        },
    )
    .await?;

    // TODO: enqueue the job on the external task runner once its client exists.
    tracing::info!(
        job_id = %job.id,
        user_id = %auth.user_id,
        host = url.host().unwrap_or_default(),
        "Video job created",
    );

    Ok(Json(ProcessCollectionResponse {
        success: true,
        job: job.into(),
        message: PROCESSING_STARTED_MESSAGE,
    }))
}
