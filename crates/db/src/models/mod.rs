//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches
//!
//! Wire-facing structs serialize with camelCase field names to match the
//! JSON contract; database columns stay snake_case.

pub mod favorite;
pub mod product;
pub mod user;
