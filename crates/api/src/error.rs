use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use partstore_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the same `{ success, message,
/// data }` envelope the success path uses, so clients never see a raw
/// fault.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `partstore_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    // Display already reads "{entity} not found".
                    (StatusCode::NOT_FOUND, core.to_string(), None)
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
                CoreError::InvalidCredentials(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone(), None),
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone(), None),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone(), None),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                        Some(msg.clone()),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(msg.clone()),
                )
            }
        };

        // 500s surface the underlying message in `data` for debugging;
        // everything else carries an empty object.
        let data = match detail {
            Some(detail) => json!(detail),
            None => json!({}),
        };

        let body = json!({
            "success": false,
            "message": message,
            "data": data,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, envelope message, and
/// optional 500 detail.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations (PostgreSQL 23505) on the well-known `uq_`
///   constraints map to the duplicate responses the contract promises.
///   This is the authoritative path under concurrent inserts; handler
///   pre-checks only provide the fast path.
/// - Everything else maps to 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String, Option<String>) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "Resource not found".to_string(),
            None,
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505.
            if db_err.code().as_deref() == Some("23505") {
                match db_err.constraint() {
                    Some("uq_favorites_user_product") => {
                        return (
                            StatusCode::CONFLICT,
                            "Product already in favorites".to_string(),
                            None,
                        );
                    }
                    Some("uq_users_email") => {
                        return (
                            StatusCode::BAD_REQUEST,
                            "User already exists".to_string(),
                            None,
                        );
                    }
                    _ => {}
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(db_err.to_string()),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(other.to_string()),
            )
        }
    }
}
