//! Repository for the `categories` table.

use async_trait::async_trait;
use helpapp_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::Category;

const COLUMNS: &str = "id, name";

/// Storage contract for [`Category`] entities.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Category>, sqlx::Error>;
    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, sqlx::Error>;
    async fn create(&self, category: &Category) -> Result<Category, sqlx::Error>;
    async fn update(&self, category: &Category) -> Result<Option<Category>, sqlx::Error>;
    async fn remove(&self, category: &Category) -> Result<bool, sqlx::Error>;
}

/// Postgres-backed [`CategoryRepository`].
#[derive(Clone)]
pub struct CategoryRepo {
    pool: PgPool,
}

impl CategoryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepo {
    async fn list(&self) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(&self, category: &Category) -> Result<Category, sqlx::Error> {
        let query = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(&category.name)
            .fetch_one(&self.pool)
            .await
    }

    async fn update(&self, category: &Category) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET name = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(category.id)
            .bind(&category.name)
            .fetch_optional(&self.pool)
            .await
    }

    /// Fails with a foreign-key violation while products still reference the category.
    async fn remove(&self, category: &Category) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(category.id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
