//! Product model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use veoflow_core::types::{DbId, Timestamp};

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub job_id: DbId,
    pub product_name: Option<String>,
    pub product_url: Option<String>,
    pub image_url: Option<String>,
    /// One of the `ProductStatus` strings.
    pub status: String,
    pub video_url: Option<String>,
    pub error_reason: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for attaching a scraped product to a job.
#[derive(Debug)]
pub struct CreateProduct {
    pub job_id: DbId,
    pub product_name: Option<String>,
    pub product_url: Option<String>,
    pub image_url: Option<String>,
}
