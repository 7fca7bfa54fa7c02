//! Video job model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use veoflow_core::collection::JobProgress;
use veoflow_core::status::VideoJobStatus;
use veoflow_core::types::{DbId, Timestamp};

/// A row from the `video_jobs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoJob {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub collection_url: String,
    /// One of the [`VideoJobStatus`] strings (enforced by a CHECK constraint).
    pub status: String,
    pub total_products: i32,
    pub completed_products: i32,
    pub failed_products: i32,
    pub error_message: Option<String>,
    pub metadata: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl VideoJob {
    /// Parsed status. `None` only if the row holds a value this build does not know.
    pub fn status(&self) -> Option<VideoJobStatus> {
        VideoJobStatus::from_str(&self.status)
    }

    pub fn progress(&self) -> JobProgress {
        JobProgress::new(
            self.total_products,
            self.completed_products,
            self.failed_products,
        )
    }
}

/// DTO for recording a newly submitted collection.
#[derive(Debug)]
pub struct CreateVideoJob {
    pub user_id: DbId,
    pub collection_url: String,
}

/// Query parameters for `GET /api/jobs`.
#[derive(Debug, Default, Deserialize)]
pub struct VideoJobListQuery {
    /// Maximum number of results. Defaults to 50, capped at 100.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}
