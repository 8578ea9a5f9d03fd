use std::sync::Arc;

use async_trait::async_trait;
use helpapp_core::error::CoreError;
use helpapp_core::types::DbId;
use helpapp_db::models::product::Product;
use helpapp_db::repositories::ProductRepository;

use crate::dtos::ProductDto;
use crate::error::ApplicationResult;
use crate::mappings::{map_all, map_optional};

const ENTITY: &str = "Product";

/// Product use cases.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Every product, in the repository's order.
    async fn get_products(&self) -> ApplicationResult<Vec<ProductDto>>;

    /// The product with `id`, or `None` if the store has no such row.
    async fn get_by_id(&self, id: DbId) -> ApplicationResult<Option<ProductDto>>;

    /// Store a new product built from `dto` (its `id` is ignored).
    async fn add(&self, dto: ProductDto) -> ApplicationResult<ProductDto>;

    /// Overwrite the product identified by `dto.id`.
    async fn update(&self, dto: ProductDto) -> ApplicationResult<ProductDto>;

    async fn remove(&self, id: DbId) -> ApplicationResult<()>;
}

/// [`ProductService`] backed by a [`ProductRepository`].
pub struct ProductServiceImpl {
    repository: Arc<dyn ProductRepository>,
}

impl ProductServiceImpl {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn get_products(&self) -> ApplicationResult<Vec<ProductDto>> {
        let products = self.repository.list().await?;
        Ok(map_all(products))
    }

    async fn get_by_id(&self, id: DbId) -> ApplicationResult<Option<ProductDto>> {
        let product = self.repository.find_by_id(id).await?;
        Ok(map_optional(product))
    }

    async fn add(&self, dto: ProductDto) -> ApplicationResult<ProductDto> {
        let product = Product::from(dto);
        let created = self.repository.create(&product).await?;
        tracing::info!(product_id = created.id, name = %created.name, "Product added");
        Ok(created.into())
    }

    async fn update(&self, dto: ProductDto) -> ApplicationResult<ProductDto> {
        let product = Product::from(dto);
        let updated = self
            .repository
            .update(&product)
            .await?
            .ok_or_else(|| CoreError::not_found(ENTITY, product.id))?;
        tracing::info!(product_id = updated.id, "Product updated");
        Ok(updated.into())
    }

    async fn remove(&self, id: DbId) -> ApplicationResult<()> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
        if !self.repository.remove(&product).await? {
            // Deleted by someone else between the lookup and the delete.
            return Err(CoreError::not_found(ENTITY, id).into());
        }
        tracing::info!(product_id = id, "Product removed");
        Ok(())
    }
}
