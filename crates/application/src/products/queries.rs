//! Read-side product requests.

use helpapp_core::types::DbId;

use crate::dtos::ProductDto;
use crate::mediator::Request;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetProductsQuery;

impl Request for GetProductsQuery {
    type Response = Vec<ProductDto>;
}

/// Fetch one product. Resolves to `CoreError::NotFound` when `id` is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetProductByIdQuery {
    pub id: DbId,
}

impl GetProductByIdQuery {
    pub fn new(id: DbId) -> Self {
        Self { id }
    }
}

impl Request for GetProductByIdQuery {
    type Response = ProductDto;
}
