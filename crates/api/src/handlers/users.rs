//! Handlers for the `/users` resource.
//!
//! Registration is public. Reads require authentication. Updates are
//! owner-or-admin; deletion only requires authentication.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use partstore_core::error::CoreError;
use partstore_core::roles::{self, ROLE_ADMIN, ROLE_USER};
use partstore_core::types::DbId;
use partstore_db::models::user::{CreateUser, UpdateUser, UserResponse};
use partstore_db::repositories::UserRepo;
use serde::Deserialize;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::auth::AuthUser;
use crate::response::{empty_ok, ApiResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /users` (registration).
///
/// Required fields are `Option` so presence can be checked explicitly and
/// answered with the contract's "Missing required fields" message instead
/// of a bare deserialization failure.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

/// Request body for `PUT /users/{id}`. All fields optional.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /users
///
/// Register a new account. The email is trimmed before the uniqueness
/// check and storage; the password is stored only as an Argon2id hash.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    let (email, password, name) = match (&input.email, &input.password, &input.name) {
        (Some(email), Some(password), Some(name))
            if !email.trim().is_empty() && !password.is_empty() && !name.is_empty() =>
        {
            (email.trim().to_string(), password.clone(), name.clone())
        }
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Missing required fields (email, password, name)".into(),
            )))
        }
    };

    let role = match &input.role {
        Some(role) => {
            roles::validate_role(role)?;
            role.clone()
        }
        None => ROLE_USER.to_string(),
    };

    // Fast-path duplicate check; uq_users_email catches the race and maps
    // to the same message.
    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Validation(
            "User already exists".into(),
        )));
    }

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        email,
        password_hash,
        name,
        role,
    };
    let user = UserRepo::create(&state.pool, &create).await?;

    tracing::info!(user_id = user.id, "User registered");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "User created successfully",
            UserResponse::from(user),
        )),
    ))
}

/// GET /users
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let users = UserRepo::list(&state.pool).await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(ApiResponse::ok("Users retrieved successfully", users)))
}

/// GET /users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User" }))?;
    Ok(Json(ApiResponse::ok(
        "User was found",
        UserResponse::from(user),
    )))
}

/// PUT /users/{id}
///
/// Owner-or-admin. Existence is checked before ownership so a missing
/// target answers 404, not 403. A provided password is re-hashed; it is
/// never stored raw.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateUserRequest>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let target = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User" }))?;

    if target.id != auth.user_id && auth.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not the same user".into(),
        )));
    }

    if let Some(role) = &input.role {
        roles::validate_role(role)?;
    }

    let password_hash = match &input.password {
        Some(password) => Some(
            hash_password(password)
                .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?,
        ),
        None => None,
    };

    let update = UpdateUser {
        email: input.email.map(|e| e.trim().to_string()),
        password_hash,
        name: input.name,
        role: input.role,
    };
    let user = UserRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User" }))?;

    Ok(Json(ApiResponse::ok(
        "User updated successfully",
        UserResponse::from(user),
    )))
}

/// DELETE /users/{id}
///
/// Any authenticated user may delete any account; the client relies on
/// this for self-service account removal. Favorites cascade at the
/// storage layer.
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "User" }));
    }
    tracing::info!(user_id = id, "User deleted");
    Ok(Json(empty_ok("User successfully deleted")))
}
