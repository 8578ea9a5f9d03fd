//! Handlers for the `/products` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use helpapp_application::dtos::{validate_dto, ProductDto};
use helpapp_application::products::commands::{
    ProductCreateCommand, ProductRemoveCommand, ProductUpdateCommand,
};
use helpapp_application::products::queries::{GetProductByIdQuery, GetProductsQuery};
use helpapp_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<ProductDto>>>> {
    let products = state
        .mediator
        .send(GetProductsQuery, state.request_token())
        .await?;
    Ok(Json(DataResponse::new(products)))
}

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProductDto>,
) -> AppResult<(StatusCode, Json<DataResponse<ProductDto>>)> {
    validate_dto(&input)?;
    let product = state
        .mediator
        .send(ProductCreateCommand::from(input), state.request_token())
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(product))))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProductDto>>> {
    let product = state
        .mediator
        .send(GetProductByIdQuery::new(id), state.request_token())
        .await?;
    Ok(Json(DataResponse::new(product)))
}

/// PUT /api/v1/products/{id}
///
/// The path id wins over any `id` in the body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProductDto>,
) -> AppResult<Json<DataResponse<ProductDto>>> {
    let input = ProductDto { id, ..input };
    validate_dto(&input)?;
    let product = state
        .mediator
        .send(ProductUpdateCommand::from(input), state.request_token())
        .await?;
    Ok(Json(DataResponse::new(product)))
}

/// DELETE /api/v1/products/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state
        .mediator
        .send(ProductRemoveCommand::new(id), state.request_token())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
