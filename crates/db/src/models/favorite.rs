//! Favorite entity model and DTOs.
//!
//! A favorite carries a denormalized snapshot of the product at the time
//! it was bookmarked. The snapshot is intentionally independent of the
//! `products` table: deleting a product leaves existing favorites intact.

use partstore_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full favorite row from the `favorites` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub product_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub stock: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a favorite.
#[derive(Debug)]
pub struct CreateFavorite {
    pub user_id: DbId,
    pub product_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub stock: i32,
}

/// DTO for updating a favorite's snapshot fields. All fields are
/// optional; `None` keeps the current value. Ownership columns
/// (`user_id`, `product_id`) are never updatable.
#[derive(Debug, Default)]
pub struct UpdateFavorite {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub stock: Option<i32>,
}
