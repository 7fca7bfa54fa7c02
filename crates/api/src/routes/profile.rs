use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// `GET /profile` (requires auth).
pub fn router() -> Router<AppState> {
    Router::new().route("/profile", get(profile::get_profile))
}
