//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use adoption_types::{
    AdoptionRepository, AppError, CategoryId, CreateCategoryRequest, RecordPaymentRequest,
    UpdateCategoryRequest,
};

use crate::AdoptionService;

/// Application state shared across handlers.
pub struct AppState<R: AdoptionRepository> {
    pub service: AdoptionService<R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

fn parse_category_id(id: &str) -> Result<CategoryId, ApiError> {
    CategoryId::parse(id)
        .map_err(|_| AppError::BadRequest("Invalid category ID".into()).into())
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Categories
// ─────────────────────────────────────────────────────────────────────────────

/// Create a category.
#[tracing::instrument(skip(state), fields(name = %req.name))]
pub async fn create_category<R: AdoptionRepository>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let category = state.service.create_category(req).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// List all categories.
#[tracing::instrument(skip(state))]
pub async fn list_categories<R: AdoptionRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = state.service.list_categories().await?;
    Ok(Json(categories))
}

/// Get a category by id. Absence is a 404, never a 200 with a null body.
#[tracing::instrument(skip(state), fields(category_id = %id))]
pub async fn get_category<R: AdoptionRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let category_id = parse_category_id(&id)?;

    let category = state.service.get_category(category_id).await?;
    Ok(Json(category))
}

/// Replace a category's mutable fields.
#[tracing::instrument(skip(state, req), fields(category_id = %id))]
pub async fn update_category<R: AdoptionRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let category_id = parse_category_id(&id)?;

    let category = state.service.update_category(category_id, req).await?;
    Ok(Json(category))
}

/// Delete a category.
#[tracing::instrument(skip(state), fields(category_id = %id))]
pub async fn delete_category<R: AdoptionRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let category_id = parse_category_id(&id)?;

    state.service.delete_category(category_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─────────────────────────────────────────────────────────────────────────────
// Payments
// ─────────────────────────────────────────────────────────────────────────────

/// Record a payment detail for a user.
#[tracing::instrument(skip(state, req), fields(user_id = %req.user_id, amount = req.amount))]
pub async fn record_payment<R: AdoptionRepository>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<RecordPaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = state.service.record_payment(req).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

/// List a user's payment documents.
#[tracing::instrument(skip(state), fields(user_id = %user_id))]
pub async fn list_user_payments<R: AdoptionRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let payments = state.service.list_payments(&user_id).await?;
    Ok(Json(payments))
}
