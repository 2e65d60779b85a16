//! Product entity model and DTOs.

use partstore_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full product row from the `products` table.
///
/// Products are public data, so the entity itself is the wire
/// representation.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub stock: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product. The category must already be
/// resolved against the closed catalog set.
#[derive(Debug)]
pub struct CreateProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub stock: i32,
}

/// DTO for updating an existing product. All fields are optional;
/// `None` keeps the current value.
#[derive(Debug, Default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub stock: Option<i32>,
}
