//! Partstore API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes) so
//! both the binary entrypoint and integration tests can assemble the same
//! application.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
