//! Handlers for the `/auth` resource (signup, verify-email, signin).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use veoflow_core::error::CoreError;
use veoflow_core::signup::{normalize_email, SignupInput};
use veoflow_core::types::DbId;
use veoflow_core::verification::VerificationToken;
use veoflow_db::models::profile::UpsertProfile;
use veoflow_db::models::user::CreateUser;
use veoflow_db::repositories::user_repo::EMAIL_UNIQUE_CONSTRAINT;
use veoflow_db::repositories::{ProfileRepo, UserRepo};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_dummy, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Error message for a sign-up with an email that already has an account.
pub const EMAIL_TAKEN_MESSAGE: &str = "A user with this email address has already been registered";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup`. Field names match the front-end form.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

/// Request body for `POST /auth/verify-email`.
#[derive(Debug, Deserialize)]
pub struct VerifyEmailRequest {
    pub token: Option<String>,
}

/// Request body for `POST /auth/signin`.
#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Public account info embedded in auth responses.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct VerifyEmailResponse {
    pub success: bool,
    pub message: &'static str,
    pub user_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct SigninResponse {
    pub success: bool,
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/signup
///
/// Create an account, write its profile, and confirm the email straight
/// away. Profile and confirmation failures are logged but do not fail the
/// request: the account already exists at that point.
pub async fn signup(
    State(state): State<AppState>,
    AppJson(input): AppJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    // 1. Validate required fields and formats.
    let input = SignupInput::new(
        input.email,
        input.password,
        input.first_name,
        input.last_name,
        input.username,
    )?;

    // 2. Create the account.
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        email: input.email.clone(),
        password_hash,
        user_metadata: serde_json::json!({
            "first_name": input.first_name.as_deref().unwrap_or_default(),
            "last_name": input.last_name.as_deref().unwrap_or_default(),
            "username": &input.username,
        }),
    };
    let user = UserRepo::create(&state.pool, &create)
        .await
        .map_err(|e| {
            if veoflow_db::is_unique_violation(&e, EMAIL_UNIQUE_CONSTRAINT) {
                AppError::BadRequest(EMAIL_TAKEN_MESSAGE.into())
            } else {
                AppError::Database(e)
            }
        })?;

    // 3. Create (or refresh) the profile row.
    let profile = UpsertProfile {
        id: user.id,
        email: user.email.clone(),
        username: Some(input.username.clone()),
        first_name: input.first_name.clone(),
        last_name: input.last_name.clone(),
    };
    if let Err(e) = ProfileRepo::upsert(&state.pool, &profile).await {
        tracing::error!(user_id = %user.id, error = %e, "Profile creation failed after signup");
    }

    // 4. Confirm the email immediately.
    match UserRepo::confirm_email(&state.pool, user.id).await {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(user_id = %user.id, "Account vanished before email confirmation");
        }
        Err(e) => {
            tracing::error!(user_id = %user.id, error = %e, "Email confirmation failed after signup");
        }
    }

    tracing::info!(user_id = %user.id, "Account created");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            success: true,
            user: UserInfo {
                id: user.id,
                email: user.email,
            },
        }),
    ))
}

/// POST /api/auth/verify-email
///
/// Confirm the email named in a `verify:<email>:<timestamp>` token.
pub async fn verify_email(
    State(state): State<AppState>,
    AppJson(input): AppJson<VerifyEmailRequest>,
) -> AppResult<Json<VerifyEmailResponse>> {
    let token = VerificationToken::parse(input.token.as_deref().unwrap_or_default())?;

    let user = UserRepo::find_by_email(&state.pool, &token.email)
        .await?
        .ok_or_else(|| CoreError::not_found("User", &token.email))?;

    if !UserRepo::confirm_email(&state.pool, user.id).await? {
        return Err(CoreError::not_found("User", user.id).into());
    }

    tracing::info!(user_id = %user.id, "Email verified");

    Ok(Json(VerifyEmailResponse {
        success: true,
        message: "Email verified successfully",
        user_id: user.id,
    }))
}

/// POST /api/auth/signin
///
/// Exchange email + password for a Bearer access token.
pub async fn signin(
    State(state): State<AppState>,
    AppJson(input): AppJson<SigninRequest>,
) -> AppResult<Json<SigninResponse>> {
    let (Some(email), Some(password)) = (
        input.email.filter(|e| !e.trim().is_empty()),
        input.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(CoreError::Validation("Missing required fields".into()).into());
    };

    let invalid_credentials =
        || AppError::Core(CoreError::Unauthorized("Invalid login credentials".into()));

    let Some(user) = UserRepo::find_by_email(&state.pool, &normalize_email(&email)).await? else {
        verify_dummy(&password);
        return Err(invalid_credentials());
    };

    let password_valid = verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid_credentials());
    }

    if !user.is_email_confirmed() {
        return Err(CoreError::Forbidden("Email not confirmed".into()).into());
    }

    let access_token = generate_access_token(user.id, &user.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = %user.id, "Signed in");

    Ok(Json(SigninResponse {
        success: true,
        access_token,
        token_type: "Bearer",
        expires_in: state.config.jwt.expires_in_secs(),
        user: UserInfo {
            id: user.id,
            email: user.email,
        },
    }))
}
