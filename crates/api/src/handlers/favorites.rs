//! Handlers for the `/favorites` resource -- per-user product bookmarks.
//!
//! Every route requires authentication and is scoped to the caller: a
//! favorite is visible and mutable only by its owner, and a lookup of
//! someone else's favorite answers 404 so the response never confirms
//! that the row exists.
//!
//! Duplicate protection is two-layered. Handlers pre-check for an
//! existing bookmark as a fast path, but the `uq_favorites_user_product`
//! constraint is the authority: when concurrent adds race past the
//! pre-check, exactly one insert wins and the loser maps to the same 409.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use partstore_core::catalog;
use partstore_core::error::CoreError;
use partstore_core::types::DbId;
use partstore_db::models::favorite::{CreateFavorite, Favorite, UpdateFavorite};
use partstore_db::repositories::FavoriteRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::auth::AuthUser;
use crate::response::{empty_ok, ApiResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /favorites`.
///
/// `productId`, `name`, `price`, and `category` are required (checked
/// explicitly for the contract's "Missing required fields" message);
/// `description`, `image`, and `stock` are genuinely optional snapshot
/// fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub product_id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub stock: Option<i32>,
}

/// Request body for `PUT /favorites/{id}`.
///
/// Snapshot fields only: the owning user and referenced product of a
/// favorite can never be changed, only the copied product data.
#[derive(Debug, Deserialize)]
pub struct UpdateFavoriteRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub stock: Option<i32>,
}

/// Validate optional numeric snapshot fields shared by add and update.
fn validate_amounts(price: Option<f64>, stock: Option<i32>) -> Result<(), CoreError> {
    if price.is_some_and(|price| price < 0.0) {
        return Err(CoreError::Validation(
            "Favorite price must not be negative".into(),
        ));
    }
    if stock.is_some_and(|stock| stock < 0) {
        return Err(CoreError::Validation(
            "Favorite stock must not be negative".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /favorites
///
/// Add a product to the caller's favorites, snapshotting the submitted
/// product data. Unlike products, an unknown category here is rejected:
/// the snapshot describes a product that already passed catalog
/// validation, so anything else is a client bug.
pub async fn add(
    State(state): State<AppState>,
    user: AuthUser,
    ApiJson(input): ApiJson<AddFavoriteRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Favorite>>)> {
    let (product_id, name, price, category) =
        match (input.product_id, &input.name, input.price, &input.category) {
            (Some(product_id), Some(name), Some(price), Some(category))
                if !name.trim().is_empty() && !category.is_empty() =>
            {
                (product_id, name.trim().to_string(), price, category.clone())
            }
            _ => {
                return Err(AppError::Core(CoreError::Validation(
                    "Missing required fields (productId, name, price, category)".into(),
                )))
            }
        };

    catalog::validate_category(&category)?;
    validate_amounts(Some(price), input.stock)?;

    // Fast path only. The unique constraint decides under races.
    if FavoriteRepo::exists(&state.pool, user.user_id, product_id).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Product already in favorites".into(),
        )));
    }

    let create = CreateFavorite {
        user_id: user.user_id,
        product_id,
        name,
        description: input.description,
        price,
        category,
        image: input.image,
        stock: input.stock.unwrap_or(0),
    };
    let favorite = FavoriteRepo::create(&state.pool, &create).await?;

    tracing::info!(
        user_id = user.user_id,
        product_id,
        favorite_id = favorite.id,
        "Product added to favorites"
    );
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Product added to favorites", favorite)),
    ))
}

/// GET /favorites
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<Favorite>>>> {
    let favorites = FavoriteRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(ApiResponse::ok(
        "Favorites retrieved successfully",
        favorites,
    )))
}

/// GET /favorites/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ApiResponse<Favorite>>> {
    let favorite = FavoriteRepo::find_by_id_for_user(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Favorite" }))?;
    Ok(Json(ApiResponse::ok(
        "Favorite retrieved successfully",
        favorite,
    )))
}

/// PUT /favorites/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateFavoriteRequest>,
) -> AppResult<Json<ApiResponse<Favorite>>> {
    if input.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
        return Err(AppError::Core(CoreError::Validation(
            "Favorite name must not be empty".into(),
        )));
    }
    if let Some(category) = &input.category {
        catalog::validate_category(category)?;
    }
    validate_amounts(input.price, input.stock)?;

    let update = UpdateFavorite {
        name: input.name.map(|name| name.trim().to_string()),
        description: input.description,
        price: input.price,
        category: input.category,
        image: input.image,
        stock: input.stock,
    };
    let favorite = FavoriteRepo::update_for_user(&state.pool, id, user.user_id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Favorite" }))?;

    Ok(Json(ApiResponse::ok(
        "Favorite updated successfully",
        favorite,
    )))
}

/// DELETE /favorites/{id}
///
/// The scoped single-statement delete is the atomic check-and-mutate:
/// there is no separate existence probe to race against.
pub async fn remove(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let deleted = FavoriteRepo::delete_for_user(&state.pool, id, user.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Favorite" }));
    }
    Ok(Json(empty_ok("Favorite removed successfully")))
}

/// DELETE /favorites/product/{productId}
///
/// Remove by product reference -- the storefront toggles a heart icon
/// without knowing favorite ids. At most one row can match thanks to
/// the unique constraint.
pub async fn remove_by_product(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(product_id): ApiPath<DbId>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let deleted =
        FavoriteRepo::delete_by_product_for_user(&state.pool, user.user_id, product_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Favorite" }));
    }
    Ok(Json(empty_ok("Favorite removed successfully")))
}
