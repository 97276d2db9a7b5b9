//! Product API handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::controllers::ApiResult;
use crate::domain::entities::Product;
use crate::error::AppError;
use crate::AppState;

/// GET /api/products
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<ApiResult<Vec<Product>>, AppError> {
    state.products_api.get_products().await
}

/// GET /api/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResult<Product>, AppError> {
    state.products_api.get_product(id).await
}

/// PUT /api/products/:id
pub async fn put_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(product): Json<Product>,
) -> Result<ApiResult<Product>, AppError> {
    state.products_api.put_product(id, product).await
}

/// POST /api/products
pub async fn post_product(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<ApiResult<Product>, AppError> {
    state.products_api.post_product(product).await
}

/// DELETE /api/products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResult<Product>, AppError> {
    state.products_api.delete_product(id).await
}
