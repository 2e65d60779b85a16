//! Route definitions for the `/products` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Product routes mounted at `/products`.
///
/// ```text
/// GET    /        -> list (public)
/// POST   /        -> create (admin)
/// POST   /bulk    -> create_bulk (admin)
/// GET    /{id}    -> get_by_id (public)
/// PUT    /{id}    -> update (admin)
/// DELETE /{id}    -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list).post(products::create))
        .route("/bulk", post(products::create_bulk))
        .route(
            "/{id}",
            get(products::get_by_id)
                .put(products::update)
                .delete(products::delete),
        )
}
