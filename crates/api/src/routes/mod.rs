//! Route definitions.
//!
//! Each resource has its own module exposing a `router()`; this module
//! assembles them into the application route tree.

pub mod auth;
pub mod favorites;
pub mod health;
pub mod products;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /login                       login (public)
/// /check                       token check (public)
///
/// /users                       register (public), list (auth)
/// /users/{id}                  get (auth), update (owner or admin), delete (auth)
///
/// /products                    list, get (public); create (admin)
/// /products/bulk               batch create (admin)
/// /products/{id}               get (public); update, delete (admin)
///
/// /favorites                   list, add (auth, owner-scoped)
/// /favorites/{id}              get, update, delete (auth, owner-scoped)
/// /favorites/product/{id}      delete by product reference (auth, owner-scoped)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/users", users::router())
        .nest("/products", products::router())
        .nest("/favorites", favorites::router())
}
