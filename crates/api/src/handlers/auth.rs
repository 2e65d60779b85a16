//! Handlers for authentication: login and explicit token check.

use axum::extract::State;
use axum::Json;
use partstore_core::error::CoreError;
use partstore_db::repositories::UserRepo;
use serde::Deserialize;

use crate::auth::jwt::{generate_token, validate_token};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::response::{empty_ok, ApiResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /check`. The token travels in the body, not in
/// the `Authorization` header.
#[derive(Debug, Deserialize, Default)]
pub struct CheckRequest {
    pub token: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /login
///
/// Verify email + password and issue a signed bearer credential.
///
/// Both failure modes are 400 with distinct messages. The lookup is an
/// exact email match: no trimming, no case folding.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<String>>> {
    // 1. Find the account.
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::InvalidCredentials("User not found".into())))?;

    // 2. Verify the password against the stored Argon2id hash.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::debug!(user_id = user.id, "Login rejected: password mismatch");
        return Err(AppError::Core(CoreError::InvalidCredentials(
            "Not the same password".into(),
        )));
    }

    // 3. Issue the credential with the role captured at this moment.
    let token = generate_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");
    Ok(Json(ApiResponse::ok("Valid email and password", token)))
}

/// POST /check
///
/// Explicit credential verification for clients that want to test a
/// stored token without hitting a protected resource. Failures are 400
/// (not 401): this endpoint reports on the token rather than gating
/// access with it.
pub async fn check(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CheckRequest>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let token = input
        .token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("Token not found".into())))?;

    validate_token(&token, &state.config.jwt)
        .map_err(|_| AppError::Core(CoreError::Validation("Token not valid".into())))?;

    Ok(Json(empty_ok("Token is valid")))
}
