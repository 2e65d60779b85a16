//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- bearer credential generation and validation.

pub mod jwt;
pub mod password;
