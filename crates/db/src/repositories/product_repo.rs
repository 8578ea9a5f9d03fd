//! Repository for the `products` table.

use async_trait::async_trait;
use helpapp_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::Product;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, stock, image, category_id";

/// Storage contract for [`Product`] entities.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in the store's natural (ascending id) order.
    async fn list(&self) -> Result<Vec<Product>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error>;

    /// Insert `product`, ignoring its `id`, and return the stored row.
    async fn create(&self, product: &Product) -> Result<Product, sqlx::Error>;

    /// Overwrite the row identified by `product.id`.
    ///
    /// Returns `None` if no such row exists.
    async fn update(&self, product: &Product) -> Result<Option<Product>, sqlx::Error>;

    /// Delete the row identified by `product.id`. Returns `true` if a row was removed.
    async fn remove(&self, product: &Product) -> Result<bool, sqlx::Error>;
}

/// Postgres-backed [`ProductRepository`].
#[derive(Clone)]
pub struct ProductRepo {
    pool: PgPool,
}

impl ProductRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepo {
    async fn list(&self) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(&self, product: &Product) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, description, price, stock, image, category_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.stock)
            .bind(&product.image)
            .bind(product.category_id)
            .fetch_one(&self.pool)
            .await
    }

    async fn update(&self, product: &Product) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = $2,
                description = $3,
                price = $4,
                stock = $5,
                image = $6,
                category_id = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(product.id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.stock)
            .bind(&product.image)
            .bind(product.category_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn remove(&self, product: &Product) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product.id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
