//! Repository for the `favorites` table.
//!
//! Every read and mutation is scoped by `user_id`: a favorite is only
//! reachable by its owner. Scoping lives in the WHERE clause rather than
//! in the handlers so a check-then-act gap cannot leak rows across users.
//!
//! Duplicate protection is anchored on the `uq_favorites_user_product`
//! unique constraint. Callers may pre-check with [`FavoriteRepo::exists`]
//! for a friendly fast path, but the constraint is the authority under
//! concurrent inserts.

use partstore_core::types::DbId;
use sqlx::PgPool;

use crate::models::favorite::{CreateFavorite, Favorite, UpdateFavorite};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, product_id, name, description, price, category, \
                        image, stock, created_at, updated_at";

/// Provides owner-scoped CRUD operations for favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Insert a new favorite, returning the created row.
    ///
    /// Fails with a unique violation on `uq_favorites_user_product` if the
    /// user already has this product bookmarked.
    pub async fn create(pool: &PgPool, input: &CreateFavorite) -> Result<Favorite, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorites \
                (user_id, product_id, name, description, price, category, image, stock)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(input.user_id)
            .bind(input.product_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.category)
            .bind(&input.image)
            .bind(input.stock)
            .fetch_one(pool)
            .await
    }

    /// True if the user already has this product in their favorites.
    pub async fn exists(
        pool: &PgPool,
        user_id: DbId,
        product_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM favorites WHERE user_id = $1 AND product_id = $2)",
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_one(pool)
        .await
    }

    /// Find a favorite by ID, visible only to its owner.
    pub async fn find_by_id_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favorites WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Favorite>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's favorites, most recently added first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Favorite>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM favorites WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a favorite's snapshot fields, scoped to its owner.
    /// Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the row does not exist or belongs to someone else.
    pub async fn update_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateFavorite,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        let query = format!(
            "UPDATE favorites SET
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                price = COALESCE($5, price),
                category = COALESCE($6, category),
                image = COALESCE($7, image),
                stock = COALESCE($8, stock),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.category)
            .bind(&input.image)
            .bind(input.stock)
            .fetch_optional(pool)
            .await
    }

    /// Delete a favorite by ID, scoped to its owner.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete_for_user(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a favorite by the product it references, scoped to its owner.
    ///
    /// At most one row matches thanks to `uq_favorites_user_product`.
    /// Returns `true` if a row was deleted.
    pub async fn delete_by_product_for_user(
        pool: &PgPool,
        user_id: DbId,
        product_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND product_id = $2")
            .bind(user_id)
            .bind(product_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
