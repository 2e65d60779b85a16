//! HTTP-level integration tests for the `/products` resource.
//!
//! Reads are public; mutations require the admin role. Category
//! coercion and the all-or-nothing bulk insert get their own tests.

mod common;

use axum::http::StatusCode;
use common::{
    auth_user, body_json, build_test_app, delete_auth, get, post_json, post_json_auth,
    put_json_auth,
};
use sqlx::PgPool;
use partstore_db::repositories::ProductRepo;

/// Insert a product through the API and return its id.
async fn seed_product(pool: &PgPool, token: &str, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let body = serde_json::json!({ "name": name, "price": 10.0 });
    let response = post_json_auth(app, "/products", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"]
        .as_i64()
        .expect("created product should have an id")
}

// ---------------------------------------------------------------------------
// Access control
// ---------------------------------------------------------------------------

/// Catalog reads need no credentials.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reads_are_public(pool: PgPool) {
    let response = get(build_test_app(pool.clone()), "/products").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Products retrieved successfully");
    assert_eq!(json["data"], serde_json::json!([]));

    let response = get(build_test_app(pool), "/products/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Product not found");
}

/// Mutations without a token answer 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_mutations_require_auth(pool: PgPool) {
    let body = serde_json::json!({ "name": "Unauthenticated" });
    let response = post_json(build_test_app(pool.clone()), "/products", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Missing Authorization header");
}

/// Mutations with a non-admin token answer 403 "Admin role required".
#[sqlx::test(migrations = "../db/migrations")]
async fn test_mutations_require_admin(pool: PgPool) {
    let (_user, token) = auth_user(&pool, "shopper@test.com", "user").await;

    let body = serde_json::json!({ "name": "Nope" });
    let response = post_json_auth(build_test_app(pool.clone()), "/products", &token, body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Admin role required");

    let body = serde_json::json!({ "name": "Nope" });
    let response =
        put_json_auth(build_test_app(pool.clone()), "/products/1", &token, body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(build_test_app(pool.clone()), "/products/1", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = serde_json::json!([{ "name": "Nope" }]);
    let response = post_json_auth(build_test_app(pool), "/products/bulk", &token, body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Admin create answers 201 and fills storage defaults for the optional
/// fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_product(pool: PgPool) {
    let (_admin, token) = auth_user(&pool, "admin@test.com", "admin").await;
    let app = build_test_app(pool);

    let body = serde_json::json!({
        "name": "Bec H7",
        "price": 25.5,
        "category": "Sisteme luminare fata",
        "stock": 40
    });
    let response = post_json_auth(app, "/products", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Product created successfully");
    assert_eq!(json["data"]["name"], "Bec H7");
    assert_eq!(json["data"]["price"], 25.5);
    assert_eq!(json["data"]["category"], "Sisteme luminare fata");
    assert_eq!(json["data"]["stock"], 40);
    assert!(json["data"]["description"].is_null());
    assert!(json["data"]["image"].is_null());
}

/// A create without a usable name answers 400 "Product name is required".
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_product_missing_name(pool: PgPool) {
    let (_admin, token) = auth_user(&pool, "admin@test.com", "admin").await;

    let response =
        post_json_auth(build_test_app(pool.clone()), "/products", &token, serde_json::json!({}))
            .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Product name is required");

    // Whitespace-only names count as missing.
    let body = serde_json::json!({ "name": "   " });
    let response = post_json_auth(build_test_app(pool), "/products", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Unknown categories are coerced to "Other"; catalog categories pass
/// through unchanged.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_product_category_coercion(pool: PgPool) {
    let (_admin, token) = auth_user(&pool, "admin@test.com", "admin").await;

    let body = serde_json::json!({ "name": "Mystery", "category": "Gadgets" });
    let response = post_json_auth(build_test_app(pool.clone()), "/products", &token, body).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["category"], "Other");

    let body = serde_json::json!({ "name": "Placute", "category": "Sisteme franare" });
    let response = post_json_auth(build_test_app(pool.clone()), "/products", &token, body).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["category"], "Sisteme franare");

    // Absent category also defaults to "Other".
    let body = serde_json::json!({ "name": "Plain" });
    let response = post_json_auth(build_test_app(pool), "/products", &token, body).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["category"], "Other");
}

/// Negative amounts are rejected with the exact messages.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_product_negative_amounts(pool: PgPool) {
    let (_admin, token) = auth_user(&pool, "admin@test.com", "admin").await;

    let body = serde_json::json!({ "name": "Bad", "price": -1.0 });
    let response = post_json_auth(build_test_app(pool.clone()), "/products", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Product price must not be negative");

    let body = serde_json::json!({ "name": "Bad", "stock": -3 });
    let response = post_json_auth(build_test_app(pool), "/products", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Product stock must not be negative");
}

// ---------------------------------------------------------------------------
// Bulk create
// ---------------------------------------------------------------------------

/// A valid batch answers 201 with every inserted row.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_bulk_create(pool: PgPool) {
    let (_admin, token) = auth_user(&pool, "admin@test.com", "admin").await;
    let app = build_test_app(pool.clone());

    let body = serde_json::json!([
        { "name": "Disc frana", "price": 150.0, "category": "Sisteme franare" },
        { "name": "Ulei 5W30", "price": 90.0, "category": "Consumabile" },
        { "name": "Unknown thing", "category": "whatever" }
    ]);
    let response = post_json_auth(app, "/products/bulk", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Products created successfully");
    let data = json["data"].as_array().expect("data should be an array");
    assert_eq!(data.len(), 3);
    assert_eq!(data[2]["category"], "Other");

    let stored = ProductRepo::list(&pool).await.unwrap();
    assert_eq!(stored.len(), 3);
}

/// One bad row fails the whole batch before anything is written.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_bulk_create_is_all_or_nothing(pool: PgPool) {
    let (_admin, token) = auth_user(&pool, "admin@test.com", "admin").await;
    let app = build_test_app(pool.clone());

    let body = serde_json::json!([
        { "name": "Fine", "price": 10.0 },
        { "name": "", "price": 20.0 },
        { "name": "Also fine", "price": 30.0 }
    ]);
    let response = post_json_auth(app, "/products/bulk", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Each product must have a non-empty name");

    let stored = ProductRepo::list(&pool).await.unwrap();
    assert!(stored.is_empty(), "a failed batch must leave no rows behind");
}

// ---------------------------------------------------------------------------
// Update and delete
// ---------------------------------------------------------------------------

/// A partial update changes only the provided fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_product_partial(pool: PgPool) {
    let (_admin, token) = auth_user(&pool, "admin@test.com", "admin").await;
    let id = seed_product(&pool, &token, "Stergator parbriz").await;

    let app = build_test_app(pool);
    let body = serde_json::json!({ "price": 35.0, "stock": 12 });
    let response = put_json_auth(app, &format!("/products/{id}"), &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Product updated successfully");
    assert_eq!(json["data"]["name"], "Stergator parbriz"); // untouched
    assert_eq!(json["data"]["price"], 35.0);
    assert_eq!(json["data"]["stock"], 12);
}

/// Updating a missing product answers 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_product(pool: PgPool) {
    let (_admin, token) = auth_user(&pool, "admin@test.com", "admin").await;
    let app = build_test_app(pool);

    let body = serde_json::json!({ "price": 1.0 });
    let response = put_json_auth(app, "/products/99999", &token, body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Product not found");
}

/// Delete answers 200 and subsequent reads answer 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_product(pool: PgPool) {
    let (_admin, token) = auth_user(&pool, "admin@test.com", "admin").await;
    let id = seed_product(&pool, &token, "Baterie 60Ah").await;

    let response = delete_auth(build_test_app(pool.clone()), &format!("/products/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Product successfully deleted");
    assert_eq!(json["data"], serde_json::json!({}));

    let response = get(build_test_app(pool.clone()), &format!("/products/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting again answers 404 as well.
    let response = delete_auth(build_test_app(pool), &format!("/products/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// List returns rows in insertion order.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_products_ordered(pool: PgPool) {
    let (_admin, token) = auth_user(&pool, "admin@test.com", "admin").await;
    let first = seed_product(&pool, &token, "First").await;
    let second = seed_product(&pool, &token, "Second").await;

    let response = get(build_test_app(pool), "/products").await;
    let json = body_json(response).await;
    let data = json["data"].as_array().expect("data should be an array");
    assert_eq!(data[0]["id"], first);
    assert_eq!(data[1]["id"], second);
}
