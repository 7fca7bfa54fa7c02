//! Handler for the signed-in user's profile.

use axum::extract::State;
use axum::Json;
use veoflow_core::error::CoreError;
use veoflow_db::models::profile::Profile;
use veoflow_db::repositories::ProfileRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/profile
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let profile = ProfileRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Profile", auth.user_id))?;

    Ok(Json(DataResponse { data: profile }))
}
