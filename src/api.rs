use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::{StoreError, ValidationError};
use crate::models::{CreateProductRequest, CreateUserRequest, Product, Record, User};
use crate::storage::RecordStore;

/// Record collections shared by every request handler.
#[derive(Default)]
pub struct AppState {
    pub users: RecordStore<User>,
    pub products: RecordStore<Product>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{0}")]
    MalformedBody(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Duplicate { .. }) => StatusCode::CONFLICT,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/:user_id", get(get_user))
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/:product_id", get(get_product))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    Json(state.users.list().await)
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.get(&user_id).await?))
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(request) = payload?;
    let user = state.users.insert(request.into_user()?).await?;

    tracing::info!(id = user.id(), username = %user.username, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

async fn list_products(State(state): State<Arc<AppState>>) -> Json<Vec<Product>> {
    Json(state.products.list().await)
}

async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.products.get(&product_id).await?))
}

async fn create_product(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(request) = payload?;
    let product = state.products.insert(request.into_product()?).await?;

    tracing::info!(id = product.id(), name = %product.name, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}
