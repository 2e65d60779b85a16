//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in
//! `20260810000001_create_users_table.sql`.

use crate::error::CoreError;

/// Default role for self-registered accounts.
pub const ROLE_USER: &str = "user";
/// Role allowed to mutate the product catalog.
pub const ROLE_ADMIN: &str = "admin";

/// All valid account roles.
pub const VALID_ROLES: &[&str] = &[ROLE_USER, ROLE_ADMIN];

/// Validate a role string against the closed role set.
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown role: '{role}'. Valid roles: {}",
            VALID_ROLES.join(", ")
        )))
    }
}
