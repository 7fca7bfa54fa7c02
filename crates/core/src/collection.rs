//! Collection submission rules: URL validation, default job values, and the
//! progress-counter invariant.

use url::Url;

use crate::error::CoreError;
use crate::status::VideoJobStatus;

/// Status every newly submitted job starts in.
pub const INITIAL_JOB_STATUS: VideoJobStatus = VideoJobStatus::Pending;

/// Message returned to the client after a job has been recorded.
pub const PROCESSING_STARTED_MESSAGE: &str =
    "Collection processing started. You can track progress in your dashboard.";

/// Maximum accepted length of a submitted collection URL.
pub const MAX_COLLECTION_URL_LENGTH: usize = 2048;

/// A submitted collection URL that parsed successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionUrl {
    raw: String,
    parsed: Url,
}

impl CollectionUrl {
    /// The URL as submitted, minus surrounding whitespace. This is what gets stored.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn host(&self) -> Option<&str> {
        self.parsed.host_str()
    }

    pub fn url(&self) -> &Url {
        &self.parsed
    }
}

/// Validate a submitted collection URL.
///
/// Only syntax is checked: any absolute URL that parses is accepted.
pub fn validate_collection_url(raw: Option<&str>) -> Result<CollectionUrl, CoreError> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("URL is required".to_string()));
    }
    if trimmed.len() > MAX_COLLECTION_URL_LENGTH {
        return Err(CoreError::Validation(format!(
            "URL exceeds maximum length of {MAX_COLLECTION_URL_LENGTH} characters"
        )));
    }
    let parsed = Url::parse(trimmed)
        .map_err(|_| CoreError::Validation("Invalid URL format".to_string()))?;
    Ok(CollectionUrl {
        raw: trimmed.to_string(),
        parsed,
    })
}

// ---------------------------------------------------------------------------
// Progress counters
// ---------------------------------------------------------------------------

/// Product counters tracked on a video job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JobProgress {
    pub total: i32,
    pub completed: i32,
    pub failed: i32,
}

impl JobProgress {
    pub fn new(total: i32, completed: i32, failed: i32) -> Self {
        Self {
            total,
            completed,
            failed,
        }
    }

    /// Check that no counter is negative and `completed + failed <= total`.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.total < 0 || self.completed < 0 || self.failed < 0 {
            return Err(CoreError::Validation(
                "Product counters must not be negative".to_string(),
            ));
        }
        if self.settled() > i64::from(self.total) {
            return Err(CoreError::Validation(format!(
                "completed ({}) + failed ({}) exceeds total products ({})",
                self.completed, self.failed, self.total
            )));
        }
        Ok(())
    }

    /// Products not yet completed or failed.
    pub fn remaining(&self) -> i32 {
        let remaining = (i64::from(self.total) - self.settled()).max(0);
        i32::try_from(remaining).unwrap_or(i32::MAX)
    }

    /// True once every product has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.settled() >= i64::from(self.total)
    }

    /// Completed plus failed, widened so the sum cannot overflow.
    fn settled(&self) -> i64 {
        i64::from(self.completed) + i64::from(self.failed)
    }
}
