use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted internally,
/// the config sits behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: partstore_db::DbPool,
    /// Server configuration (token secret, CORS, timeouts).
    pub config: Arc<ServerConfig>,
}
