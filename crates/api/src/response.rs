//! Shared response envelope for API handlers.
//!
//! Every endpoint answers with `{ "success": bool, "message": string,
//! "data": ... }` -- on success and on failure alike. Handlers build the
//! success side with [`ApiResponse`]; failures take the same shape via
//! [`crate::error::AppError`]'s `IntoResponse` impl. Use this instead of
//! ad-hoc `serde_json::json!` envelopes to get compile-time type safety
//! and consistent serialization.

use serde::Serialize;

/// Standard `{ success, message, data }` success envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::ok("Products retrieved successfully", products)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Build a success envelope around `data`.
    pub fn ok(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data,
        }
    }
}

/// Success envelope with an empty `data` object, for deletes and other
/// operations with nothing to return.
pub fn empty_ok(message: &str) -> ApiResponse<serde_json::Value> {
    ApiResponse::ok(message, serde_json::json!({}))
}
