pub mod auth;
pub mod collections;
pub mod health;
pub mod jobs;
pub mod profile;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                     create account (public)
/// /auth/verify-email               confirm email (public)
/// /auth/signin                     issue access token (public)
///
/// /process-collection              record a pending video job (auth)
///
/// /jobs                            list own jobs (auth)
/// /jobs/{id}                       get with products, delete (auth)
///
/// /profile                         own profile (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(collections::router())
        .nest("/jobs", jobs::router())
        .merge(profile::router())
}
