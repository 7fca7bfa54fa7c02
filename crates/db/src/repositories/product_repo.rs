//! Repository for the `products` table.

use sqlx::PgPool;
use veoflow_core::status::ProductStatus;
use veoflow_core::types::DbId;

use crate::models::product::{CreateProduct, Product};

const COLUMNS: &str = "id, job_id, product_name, product_url, image_url, status, \
                        video_url, error_reason, created_at, updated_at";

pub struct ProductRepo;

impl ProductRepo {
    /// Attach a pending product to a job.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (job_id, product_name, product_url, image_url, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(input.job_id)
            .bind(&input.product_name)
            .bind(&input.product_url)
            .bind(&input.image_url)
            .bind(ProductStatus::Pending.as_str())
            .fetch_one(pool)
            .await
    }

    /// All products of a job in insertion order.
    pub async fn list_by_job(pool: &PgPool, job_id: DbId) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products WHERE job_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(job_id)
            .fetch_all(pool)
            .await
    }

    /// Record a product's generation outcome.
    ///
    /// Completed and failed products are left untouched. Returns `None` if
    /// no product with the given id exists or it has already finished.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: ProductStatus,
        video_url: Option<&str>,
        error_reason: Option<&str>,
    ) -> Result<Option<Product>, sqlx::Error> {
        let finished: Vec<&str> = ProductStatus::ALL
            .iter()
            .filter(|s| s.is_terminal())
            .map(|s| s.as_str())
            .collect();
        let query = format!(
            "UPDATE products SET status = $2, video_url = $3, error_reason = $4
             WHERE id = $1 AND status <> ALL($5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(video_url)
            .bind(error_reason)
            .bind(finished)
            .fetch_optional(pool)
            .await
    }
}
