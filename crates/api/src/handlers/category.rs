//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use helpapp_application::dtos::{validate_dto, CategoryDto};
use helpapp_core::error::CoreError;
use helpapp_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<CategoryDto>>>> {
    let categories = state.categories.get_categories().await?;
    Ok(Json(DataResponse::new(categories)))
}

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CategoryDto>,
) -> AppResult<(StatusCode, Json<DataResponse<CategoryDto>>)> {
    validate_dto(&input)?;
    let category = state.categories.add(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(category))))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CategoryDto>>> {
    let category = state
        .categories
        .get_by_id(id)
        .await?
        .ok_or(CoreError::not_found("Category", id))?;
    Ok(Json(DataResponse::new(category)))
}

/// PUT /api/v1/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CategoryDto>,
) -> AppResult<Json<DataResponse<CategoryDto>>> {
    let input = CategoryDto { id, ..input };
    validate_dto(&input)?;
    let category = state.categories.update(input).await?;
    Ok(Json(DataResponse::new(category)))
}

/// DELETE /api/v1/categories/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.categories.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
