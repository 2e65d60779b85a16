//! Handlers for the `/products` resource.
//!
//! Reads are public; every mutation requires the admin role. Unknown
//! categories are coerced to "Other" rather than rejected, so bulk
//! imports from sloppy sources do not fail row by row.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use partstore_core::catalog;
use partstore_core::error::CoreError;
use partstore_core::types::DbId;
use partstore_db::models::product::{CreateProduct, Product, UpdateProduct};
use partstore_db::repositories::ProductRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{empty_ok, ApiResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /products` and each item of `POST /products/bulk`.
///
/// Only the name is required; everything else has a storage default.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub stock: Option<i32>,
}

/// Request body for `PUT /products/{id}`. All fields optional.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub stock: Option<i32>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Convert a request into an insert DTO.
///
/// `name` must already be validated for presence; the differing
/// single/bulk error messages live at the call sites.
fn to_create_dto(name: String, input: CreateProductRequest) -> Result<CreateProduct, CoreError> {
    let price = input.price.unwrap_or(0.0);
    if price < 0.0 {
        return Err(CoreError::Validation(
            "Product price must not be negative".into(),
        ));
    }

    let stock = input.stock.unwrap_or(0);
    if stock < 0 {
        return Err(CoreError::Validation(
            "Product stock must not be negative".into(),
        ));
    }

    Ok(CreateProduct {
        name,
        description: input.description,
        price,
        category: catalog::normalize_category(input.category.as_deref()).to_string(),
        image: input.image,
        stock,
    })
}

/// Extract a non-empty, trimmed product name.
fn required_name(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /products
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(input): ApiJson<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    let name = required_name(&input.name).ok_or_else(|| {
        AppError::Core(CoreError::Validation("Product name is required".into()))
    })?;

    let create = to_create_dto(name, input)?;
    let product = ProductRepo::create(&state.pool, &create).await?;

    tracing::info!(product_id = product.id, "Product created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Product created successfully", product)),
    ))
}

/// POST /products/bulk
///
/// Insert a batch of products in one transaction. The whole batch is
/// validated before any row is written, and the insert itself is
/// all-or-nothing.
pub async fn create_bulk(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(inputs): ApiJson<Vec<CreateProductRequest>>,
) -> AppResult<(StatusCode, Json<ApiResponse<Vec<Product>>>)> {
    let mut creates = Vec::with_capacity(inputs.len());
    for input in inputs {
        let name = required_name(&input.name).ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Each product must have a non-empty name".into(),
            ))
        })?;
        creates.push(to_create_dto(name, input)?);
    }

    let products = ProductRepo::create_many(&state.pool, &creates).await?;

    tracing::info!(count = products.len(), "Products bulk created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Products created successfully", products)),
    ))
}

/// GET /products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(
        "Products retrieved successfully",
        products,
    )))
}

/// GET /products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Product" }))?;
    Ok(Json(ApiResponse::ok("Product was found", product)))
}

/// PUT /products/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateProductRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let name = match &input.name {
        Some(_) => Some(required_name(&input.name).ok_or_else(|| {
            AppError::Core(CoreError::Validation("Product name is required".into()))
        })?),
        None => None,
    };

    if input.price.is_some_and(|price| price < 0.0) {
        return Err(AppError::Core(CoreError::Validation(
            "Product price must not be negative".into(),
        )));
    }
    if input.stock.is_some_and(|stock| stock < 0) {
        return Err(AppError::Core(CoreError::Validation(
            "Product stock must not be negative".into(),
        )));
    }

    let update = UpdateProduct {
        name,
        description: input.description,
        price: input.price,
        category: input
            .category
            .as_deref()
            .map(|c| catalog::normalize_category(Some(c)).to_string()),
        image: input.image,
        stock: input.stock,
    };
    let product = ProductRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Product" }))?;

    Ok(Json(ApiResponse::ok("Product updated successfully", product)))
}

/// DELETE /products/{id}
///
/// Removes the product from the catalog. Favorites that snapshot it are
/// untouched.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let deleted = ProductRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Product" }));
    }
    tracing::info!(product_id = id, "Product deleted");
    Ok(Json(empty_ok("Product successfully deleted")))
}
