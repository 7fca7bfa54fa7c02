use axum::routing::post;
use axum::Router;

use crate::handlers::collections;
use crate::state::AppState;

/// `POST /process-collection` (requires auth).
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/process-collection",
        post(collections::process_collection),
    )
}
