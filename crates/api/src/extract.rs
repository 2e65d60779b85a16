//! Request extractors with envelope-shaped rejections.
//!
//! Axum's stock `Json` and `Path` extractors reject malformed input with
//! plain-text responses. The contract requires every response, including
//! extraction failures, to carry the `{ success, message, data }`
//! envelope, so handlers use these wrappers instead: they delegate to the
//! stock extractors and route rejections through [`AppError`].

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};
use partstore_core::error::CoreError;

use crate::error::AppError;

/// JSON body extractor whose rejection is an [`AppError`] (400 envelope).
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor whose rejection is an [`AppError`] (400 envelope).
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}
