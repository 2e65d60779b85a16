//! Domain error taxonomy.
//!
//! Variants map one-to-one onto HTTP status codes at the API boundary:
//! `NotFound` → 404, `Validation` and `InvalidCredentials` → 400,
//! `Unauthorized` → 401, `Forbidden` → 403, `Conflict` → 409,
//! `Internal` → 500. `InvalidCredentials` exists separately from
//! `Unauthorized` because login failures answer 400, not 401.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
