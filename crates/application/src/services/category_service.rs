use std::sync::Arc;

use async_trait::async_trait;
use helpapp_core::error::CoreError;
use helpapp_core::types::DbId;
use helpapp_db::models::category::Category;
use helpapp_db::repositories::CategoryRepository;

use crate::dtos::CategoryDto;
use crate::error::ApplicationResult;
use crate::mappings::{map_all, map_optional};

const ENTITY: &str = "Category";

/// Category use cases. Same contract as
/// [`ProductService`](crate::services::ProductService) over [`CategoryDto`].
#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn get_categories(&self) -> ApplicationResult<Vec<CategoryDto>>;
    async fn get_by_id(&self, id: DbId) -> ApplicationResult<Option<CategoryDto>>;
    async fn add(&self, dto: CategoryDto) -> ApplicationResult<CategoryDto>;
    async fn update(&self, dto: CategoryDto) -> ApplicationResult<CategoryDto>;
    async fn remove(&self, id: DbId) -> ApplicationResult<()>;
}

/// [`CategoryService`] backed by a [`CategoryRepository`].
pub struct CategoryServiceImpl {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryServiceImpl {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CategoryService for CategoryServiceImpl {
    async fn get_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        Ok(map_all(self.repository.list().await?))
    }

    async fn get_by_id(&self, id: DbId) -> ApplicationResult<Option<CategoryDto>> {
        Ok(map_optional(self.repository.find_by_id(id).await?))
    }

    async fn add(&self, dto: CategoryDto) -> ApplicationResult<CategoryDto> {
        let created = self.repository.create(&Category::from(dto)).await?;
        tracing::info!(category_id = created.id, name = %created.name, "Category added");
        Ok(created.into())
    }

    async fn update(&self, dto: CategoryDto) -> ApplicationResult<CategoryDto> {
        let category = Category::from(dto);
        let updated = self
            .repository
            .update(&category)
            .await?
            .ok_or_else(|| CoreError::not_found(ENTITY, category.id))?;
        Ok(updated.into())
    }

    async fn remove(&self, id: DbId) -> ApplicationResult<()> {
        let category = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
        if !self.repository.remove(&category).await? {
            return Err(CoreError::not_found(ENTITY, id).into());
        }
        tracing::info!(category_id = id, "Category removed");
        Ok(())
    }
}
