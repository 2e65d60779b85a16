//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// User routes mounted at `/users`.
///
/// ```text
/// POST   /        -> register (public)
/// GET    /        -> list
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update (owner or admin)
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(users::register).get(users::list))
        .route(
            "/{id}",
            get(users::get_by_id)
                .put(users::update)
                .delete(users::delete),
        )
}
