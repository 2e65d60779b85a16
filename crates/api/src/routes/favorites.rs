//! Route definitions for the `/favorites` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Favorite routes mounted at `/favorites`. All require authentication
/// and operate on the caller's own favorites only.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> add
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> remove
/// DELETE /product/{id}      -> remove_by_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::list).post(favorites::add))
        .route(
            "/{id}",
            get(favorites::get_by_id)
                .put(favorites::update)
                .delete(favorites::remove),
        )
        .route("/product/{product_id}", delete(favorites::remove_by_product))
}
