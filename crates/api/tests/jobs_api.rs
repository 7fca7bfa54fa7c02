//! HTTP-level integration tests for the dashboard `/api/jobs` and
//! `/api/profile` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, get_auth, post_json_auth, signed_in_user};
use sqlx::PgPool;
use veoflow_db::models::product::CreateProduct;
use veoflow_core::collection::JobProgress;
use veoflow_core::status::VideoJobStatus;
use veoflow_db::repositories::{ProductRepo, VideoJobRepo};

/// Submit a collection through the API and return the new job id.
async fn submit(pool: &PgPool, token: &str, url: &str) -> uuid::Uuid {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/process-collection",
        serde_json::json!({ "url": url }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["job"]["id"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap()
}

/// Jobs are listed newest first and only for their owner.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_jobs_scoped_to_caller(pool: PgPool) {
    let (_a, token_a) = signed_in_user(&pool, "a@example.com", "a").await;
    let (_b, token_b) = signed_in_user(&pool, "b@example.com", "b").await;

    submit(&pool, &token_a, "https://shop.test/one").await;
    submit(&pool, &token_a, "https://shop.test/two").await;
    submit(&pool, &token_b, "https://shop.test/other").await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/jobs", &token_a).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let jobs = json["data"].as_array().unwrap();
    assert_eq!(jobs.len(), 2);
    let mut urls: Vec<&str> = jobs
        .iter()
        .map(|j| j["collection_url"].as_str().unwrap())
        .collect();
    urls.sort_unstable();
    assert_eq!(urls, ["https://shop.test/one", "https://shop.test/two"]);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/jobs?limit=1", &token_a).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

/// A job is returned with its products.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_job_with_products(pool: PgPool) {
    let (_user, token) = signed_in_user(&pool, "detail@example.com", "detail").await;
    let job_id = submit(&pool, &token, "https://shop.test/detail").await;

    ProductRepo::create(
        &pool,
        &CreateProduct {
            job_id,
            product_name: Some("Canvas Tote".to_string()),
            product_url: Some("https://shop.test/products/tote".to_string()),
            image_url: Some("https://cdn.shop.test/tote.jpg".to_string()),
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/jobs/{job_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["job"]["id"], job_id.to_string());
    assert_eq!(json["data"]["job"]["status"], "pending");
    let products = json["data"]["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["product_name"], "Canvas Tote");
    assert_eq!(products[0]["status"], "pending");
    assert_eq!(json["data"]["progress"]["remaining_products"], 0);
    assert_eq!(json["data"]["progress"]["finished"], false);
}

/// Progress figures follow the stored counters and status.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_job_reports_progress(pool: PgPool) {
    let (_user, token) = signed_in_user(&pool, "progress@example.com", "progress").await;
    let job_id = submit(&pool, &token, "https://shop.test/progress").await;

    VideoJobRepo::update_progress(&pool, job_id, &JobProgress::new(5, 2, 1))
        .await
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, &format!("/api/jobs/{job_id}"), &token).await).await;
    assert_eq!(json["data"]["progress"]["remaining_products"], 2);
    assert_eq!(json["data"]["progress"]["all_products_settled"], false);
    assert_eq!(json["data"]["progress"]["finished"], false);

    VideoJobRepo::update_progress(&pool, job_id, &JobProgress::new(5, 4, 1))
        .await
        .unwrap();
    VideoJobRepo::update_status(&pool, job_id, VideoJobStatus::Completed, None)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, &format!("/api/jobs/{job_id}"), &token).await).await;
    assert_eq!(json["data"]["progress"]["remaining_products"], 0);
    assert_eq!(json["data"]["progress"]["all_products_settled"], true);
    assert_eq!(json["data"]["progress"]["finished"], true);
}

/// Another user's job and a random id are both 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_job_not_found(pool: PgPool) {
    let (_a, token_a) = signed_in_user(&pool, "owner@example.com", "owner").await;
    let (_b, token_b) = signed_in_user(&pool, "intruder@example.com", "intruder").await;
    let job_id = submit(&pool, &token_a, "https://shop.test/private").await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/jobs/{job_id}"), &token_b).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/jobs/{job_id}"), &token_b).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let random = uuid::Uuid::new_v4();
    let response = get_auth(app, &format!("/api/jobs/{random}"), &token_a).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Video job not found");
}

/// Deleting a job removes its products.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_job_cascades(pool: PgPool) {
    let (_user, token) = signed_in_user(&pool, "del@example.com", "del").await;
    let job_id = submit(&pool, &token, "https://shop.test/delete").await;
    ProductRepo::create(
        &pool,
        &CreateProduct {
            job_id,
            product_name: None,
            product_url: None,
            image_url: None,
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/jobs/{job_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(common::count_rows(&pool, "video_jobs").await, 0);
    assert_eq!(common::count_rows(&pool, "products").await, 0);
}

/// Dashboard endpoints require a token.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_endpoints_require_auth(pool: PgPool) {
    for uri in ["/api/jobs", "/api/profile"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
}

/// The profile endpoint returns the caller's profile.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_profile(pool: PgPool) {
    let (user_id, token) = signed_in_user(&pool, "me@example.com", "me").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/profile", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], user_id);
    assert_eq!(json["data"]["email"], "me@example.com");
    assert_eq!(json["data"]["username"], "me");
    assert_eq!(json["data"]["first_name"], "Test");
}
