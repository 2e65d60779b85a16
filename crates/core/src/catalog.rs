//! Product category catalog.
//!
//! Categories are a closed set of display strings stored verbatim in the
//! database. The set mixes generic shop categories with the auto-parts
//! ones the storefront actually sells (brake systems, wipers, batteries).
//!
//! The two layers treat unknown values differently: the product catalog
//! coerces them to [`CATEGORY_OTHER`], while favorites reject them, since
//! a favorite snapshots a product that already passed through the catalog.

use crate::error::CoreError;

/// Fallback category for products submitted with an unknown or absent one.
pub const CATEGORY_OTHER: &str = "Other";

/// All valid product categories.
pub const VALID_CATEGORIES: &[&str] = &[
    "Electronics",
    "Clothing",
    "Books",
    "Home",
    "Sports",
    "Food",
    CATEGORY_OTHER,
    "Sisteme franare",
    "Consumabile",
    "Sisteme luminare fata",
    "Sisteme curatare parbriz",
    "Baterii",
    "Sisteme de parcare",
];

/// True if `category` is a member of the closed set (case-sensitive).
pub fn is_valid_category(category: &str) -> bool {
    VALID_CATEGORIES.contains(&category)
}

/// Resolve a submitted category to a storable one.
///
/// Unknown or absent values become [`CATEGORY_OTHER`].
pub fn normalize_category(raw: Option<&str>) -> &str {
    match raw {
        Some(category) if is_valid_category(category) => category,
        _ => CATEGORY_OTHER,
    }
}

/// Validate a category strictly, returning an error for unknown values.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if is_valid_category(category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown category: '{category}'. Valid categories: {}",
            VALID_CATEGORIES.join(", ")
        )))
    }
}
