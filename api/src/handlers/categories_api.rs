//! Category API handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::controllers::ApiResult;
use crate::domain::entities::Category;
use crate::error::AppError;
use crate::AppState;

/// GET /api/categories
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<ApiResult<Vec<Category>>, AppError> {
    state.categories_api.get_categories().await
}

/// GET /api/categories/:id
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResult<Category>, AppError> {
    state.categories_api.get_category(id).await
}

/// POST /api/categories
pub async fn post_category(
    State(state): State<AppState>,
    Json(category): Json<Category>,
) -> Result<ApiResult<Category>, AppError> {
    state.categories_api.post_category(category).await
}

/// DELETE /api/categories/:id
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResult<Category>, AppError> {
    state.categories_api.delete_category(id).await
}
