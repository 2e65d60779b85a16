//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate input explicitly, delegate to the corresponding
//! repository in `partstore_db`, and map errors via
//! [`crate::error::AppError`] so every response carries the standard
//! envelope.

pub mod auth;
pub mod favorites;
pub mod products;
pub mod users;
