//! One handler per product request, each delegating to [`ProductService`].

use std::sync::Arc;

use async_trait::async_trait;
use helpapp_core::error::CoreError;
use tokio_util::sync::CancellationToken;

use crate::dtos::ProductDto;
use crate::error::ApplicationResult;
use crate::mediator::RequestHandler;
use crate::products::commands::{ProductCreateCommand, ProductRemoveCommand, ProductUpdateCommand};
use crate::products::queries::{GetProductByIdQuery, GetProductsQuery};
use crate::services::ProductService;

macro_rules! service_handler {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name {
            service: Arc<dyn ProductService>,
        }

        impl $name {
            pub fn new(service: Arc<dyn ProductService>) -> Self {
                Self { service }
            }
        }
    };
}

service_handler!(
    /// Handles [`GetProductsQuery`].
    GetProductsQueryHandler
);
service_handler!(
    /// Handles [`GetProductByIdQuery`].
    GetProductByIdQueryHandler
);
service_handler!(
    /// Handles [`ProductCreateCommand`].
    ProductCreateCommandHandler
);
service_handler!(
    /// Handles [`ProductUpdateCommand`].
    ProductUpdateCommandHandler
);
service_handler!(
    /// Handles [`ProductRemoveCommand`].
    ProductRemoveCommandHandler
);

#[async_trait]
impl RequestHandler<GetProductsQuery> for GetProductsQueryHandler {
    async fn handle(
        &self,
        _query: GetProductsQuery,
        _cancel: CancellationToken,
    ) -> ApplicationResult<Vec<ProductDto>> {
        self.service.get_products().await
    }
}

#[async_trait]
impl RequestHandler<GetProductByIdQuery> for GetProductByIdQueryHandler {
    async fn handle(
        &self,
        query: GetProductByIdQuery,
        _cancel: CancellationToken,
    ) -> ApplicationResult<ProductDto> {
        self.service
            .get_by_id(query.id)
            .await?
            .ok_or_else(|| CoreError::not_found("Product", query.id).into())
    }
}

#[async_trait]
impl RequestHandler<ProductCreateCommand> for ProductCreateCommandHandler {
    async fn handle(
        &self,
        command: ProductCreateCommand,
        _cancel: CancellationToken,
    ) -> ApplicationResult<ProductDto> {
        self.service.add(command.into()).await
    }
}

#[async_trait]
impl RequestHandler<ProductUpdateCommand> for ProductUpdateCommandHandler {
    async fn handle(
        &self,
        command: ProductUpdateCommand,
        _cancel: CancellationToken,
    ) -> ApplicationResult<ProductDto> {
        self.service.update(command.into()).await
    }
}

#[async_trait]
impl RequestHandler<ProductRemoveCommand> for ProductRemoveCommandHandler {
    async fn handle(
        &self,
        command: ProductRemoveCommand,
        _cancel: CancellationToken,
    ) -> ApplicationResult<()> {
        self.service.remove(command.id).await
    }
}
