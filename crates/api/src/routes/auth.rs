//! Route definitions for authentication.
//!
//! Mounted at the root: the wire contract puts `/login` and `/check`
//! top-level, not under a prefix.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Authentication routes.
///
/// ```text
/// POST /login   -> login
/// POST /check   -> check
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/check", post(auth::check))
}
