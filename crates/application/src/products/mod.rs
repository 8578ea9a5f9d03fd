//! Product commands, queries and their handlers.

pub mod commands;
pub mod handlers;
pub mod queries;

use std::sync::Arc;

use crate::mediator::MediatorBuilder;
use crate::services::ProductService;

use commands::{ProductCreateCommand, ProductRemoveCommand, ProductUpdateCommand};
use handlers::{
    GetProductByIdQueryHandler, GetProductsQueryHandler, ProductCreateCommandHandler,
    ProductRemoveCommandHandler, ProductUpdateCommandHandler,
};
use queries::{GetProductByIdQuery, GetProductsQuery};

/// Bind every product request type to its handler.
pub fn register_product_handlers(
    builder: MediatorBuilder,
    service: Arc<dyn ProductService>,
) -> MediatorBuilder {
    builder
        .register::<GetProductsQuery, _>(GetProductsQueryHandler::new(Arc::clone(&service)))
        .register::<GetProductByIdQuery, _>(GetProductByIdQueryHandler::new(Arc::clone(
            &service,
        )))
        .register::<ProductCreateCommand, _>(ProductCreateCommandHandler::new(Arc::clone(
            &service,
        )))
        .register::<ProductUpdateCommand, _>(ProductUpdateCommandHandler::new(Arc::clone(
            &service,
        )))
        .register::<ProductRemoveCommand, _>(ProductRemoveCommandHandler::new(service))
}
