//! Repository for the `products` table.

use partstore_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, category, image, stock, \
                        created_at, updated_at";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, description, price, category, image, stock)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.category)
            .bind(&input.image)
            .bind(input.stock)
            .fetch_one(pool)
            .await
    }

    /// Insert a batch of products in a single transaction.
    ///
    /// All-or-nothing: any failed insert rolls the whole batch back.
    /// Returns the created rows in input order.
    pub async fn create_many(
        pool: &PgPool,
        inputs: &[CreateProduct],
    ) -> Result<Vec<Product>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO products (name, description, price, category, image, stock)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            let product = sqlx::query_as::<_, Product>(&query)
                .bind(&input.name)
                .bind(&input.description)
                .bind(input.price)
                .bind(&input.category)
                .bind(&input.image)
                .bind(input.stock)
                .fetch_one(&mut *tx)
                .await?;
            created.push(product);
        }

        tx.commit().await?;
        Ok(created)
    }

    /// Find a product by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all products in catalog order.
    ///
    /// Ordered by `id` rather than `created_at`: batch inserts share one
    /// transaction timestamp, which would make timestamp order unstable.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Update a product. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                category = COALESCE($5, category),
                image = COALESCE($6, image),
                stock = COALESCE($7, stock),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.category)
            .bind(&input.image)
            .bind(input.stock)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a product. Favorites referencing it keep their snapshot.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
