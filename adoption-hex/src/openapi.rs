//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use adoption_types::domain::{Category, CategoryId, Payment, PaymentDetail, PaymentId};
use adoption_types::dto::{CreateCategoryRequest, RecordPaymentRequest, UpdateCategoryRequest};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<Category>)
    )
)]
async fn list_categories() {}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    params(
        ("id" = CategoryId, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category details", body = Category),
        (status = 404, description = "Category not found")
    )
)]
async fn get_category() {}

/// Create a new category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created successfully", body = Category),
        (status = 400, description = "Invalid request"),
        (status = 409, description = "Category id already taken")
    )
)]
async fn create_category() {}

/// Replace a category's mutable fields
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "categories",
    request_body = UpdateCategoryRequest,
    params(
        ("id" = CategoryId, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 404, description = "Category not found"),
        (status = 400, description = "Invalid request")
    )
)]
async fn update_category() {}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "categories",
    params(
        ("id" = CategoryId, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found")
    )
)]
async fn delete_category() {}

/// Record a payment detail for a user
#[utoipa::path(
    post,
    path = "/payments",
    tag = "payments",
    request_body = RecordPaymentRequest,
    responses(
        (status = 201, description = "Payment recorded", body = Payment),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Named payment document not found")
    )
)]
async fn record_payment() {}

/// List a user's payment documents
#[utoipa::path(
    get,
    path = "/users/{user_id}/payments",
    tag = "payments",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Payment documents for the user", body = Vec<Payment>)
    )
)]
async fn list_user_payments() {}

/// OpenAPI documentation for the Adoption API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet Adoption Backend API",
        version = "1.0.0",
        description = "CRUD backend for a pet-adoption application: category management and per-user payment history.",
        license(name = "MIT"),
    ),
    paths(
        health,
        list_categories,
        get_category,
        create_category,
        update_category,
        delete_category,
        record_payment,
        list_user_payments,
    ),
    components(
        schemas(
            Category,
            CategoryId,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            Payment,
            PaymentId,
            PaymentDetail,
            RecordPaymentRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "categories", description = "Category management operations"),
        (name = "payments", description = "Payment recording and history"),
    )
)]
pub struct ApiDoc;
