//! Domain primitives shared by the partstore backend crates.
//!
//! Holds the error taxonomy, ID/timestamp aliases, and the closed sets
//! (roles, product categories) that the API and storage layers validate
//! against. No I/O lives here.

pub mod catalog;
pub mod error;
pub mod roles;
pub mod types;
