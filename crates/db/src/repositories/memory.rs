//! In-memory repositories.
//!
//! Both repositories share one [`MemoryStore`]: the product and category
//! tables sit behind a single Tokio `RwLock`, so a write sees both tables in
//! one consistent state. Rows live in `BTreeMap`s, so listing returns
//! ascending id order like the Postgres implementations. Ids are assigned
//! from a per-table counter starting at 1.
//!
//! Writes enforce the constraints declared in the migrations
//! (`uq_categories_name`, the `products.category_id` foreign key with
//! `ON DELETE RESTRICT`) and fail with the same SQLSTATE and constraint name
//! Postgres reports, so callers classify both backends identically.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use helpapp_core::types::DbId;
use sqlx::error::{DatabaseError, ErrorKind};
use tokio::sync::RwLock;

use crate::models::category::Category;
use crate::models::product::Product;
use crate::repositories::{CategoryRepository, ProductRepository};

/// Categories inserted by [`MemoryStore::seeded`], mirroring the initial
/// migration.
const SEED_CATEGORIES: [&str; 3] = ["School Supplies", "Electronics", "Accessories"];

const UQ_CATEGORIES_NAME: &str = "uq_categories_name";
/// Postgres' default name for the `products.category_id` reference.
const FK_PRODUCTS_CATEGORY: &str = "products_category_id_fkey";

/// PostgreSQL SQLSTATE `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// A constraint failure raised by the in-memory store.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
struct ConstraintViolation {
    code: &'static str,
    constraint: &'static str,
    message: String,
}

impl ConstraintViolation {
    fn unique(constraint: &'static str) -> sqlx::Error {
        Self {
            code: UNIQUE_VIOLATION,
            constraint,
            message: format!("duplicate key value violates unique constraint \"{constraint}\""),
        }
        .into_sqlx()
    }

    fn foreign_key(constraint: &'static str, message: String) -> sqlx::Error {
        Self {
            code: FOREIGN_KEY_VIOLATION,
            constraint,
            message,
        }
        .into_sqlx()
    }

    fn into_sqlx(self) -> sqlx::Error {
        sqlx::Error::Database(Box::new(self))
    }
}

impl DatabaseError for ConstraintViolation {
    fn message(&self) -> &str {
        &self.message
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.code))
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self
    }

    fn constraint(&self) -> Option<&str> {
        Some(self.constraint)
    }

    fn kind(&self) -> ErrorKind {
        match self.code {
            UNIQUE_VIOLATION => ErrorKind::UniqueViolation,
            FOREIGN_KEY_VIOLATION => ErrorKind::ForeignKeyViolation,
            _ => ErrorKind::Other,
        }
    }
}

struct Table<T> {
    rows: BTreeMap<DbId, T>,
    last_id: DbId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    fn list(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn get(&self, id: DbId) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn contains(&self, id: DbId) -> bool {
        self.rows.contains_key(&id)
    }

    fn insert(&mut self, build: impl FnOnce(DbId) -> T) -> T {
        self.last_id += 1;
        let row = build(self.last_id);
        self.rows.insert(self.last_id, row.clone());
        row
    }

    fn replace(&mut self, id: DbId, row: T) -> Option<T> {
        let slot = self.rows.get_mut(&id)?;
        *slot = row.clone();
        Some(row)
    }

    fn delete(&mut self, id: DbId) -> bool {
        self.rows.remove(&id).is_some()
    }
}

#[derive(Default)]
struct Tables {
    products: Table<Product>,
    categories: Table<Category>,
}

impl Tables {
    fn ensure_category_exists(&self, category_id: DbId) -> Result<(), sqlx::Error> {
        if self.categories.contains(category_id) {
            return Ok(());
        }
        Err(ConstraintViolation::foreign_key(
            FK_PRODUCTS_CATEGORY,
            format!(
                "insert or update on table \"products\" violates foreign key constraint \
                 \"{FK_PRODUCTS_CATEGORY}\""
            ),
        ))
    }

    /// `name` must not belong to any category other than `except`.
    fn ensure_name_free(&self, name: &str, except: Option<DbId>) -> Result<(), sqlx::Error> {
        let taken = self
            .categories
            .rows
            .values()
            .any(|c| c.name == name && Some(c.id) != except);
        if taken {
            return Err(ConstraintViolation::unique(UQ_CATEGORIES_NAME));
        }
        Ok(())
    }

    fn ensure_category_unreferenced(&self, category_id: DbId) -> Result<(), sqlx::Error> {
        let referenced = self
            .products
            .rows
            .values()
            .any(|p| p.category_id == category_id);
        if referenced {
            return Err(ConstraintViolation::foreign_key(
                FK_PRODUCTS_CATEGORY,
                format!(
                    "update or delete on table \"categories\" violates foreign key constraint \
                     \"{FK_PRODUCTS_CATEGORY}\" on table \"products\""
                ),
            ));
        }
        Ok(())
    }
}

/// Process-local storage shared by [`InMemoryProductRepo`] and
/// [`InMemoryCategoryRepo`]. Cheap to clone.
#[derive(Clone)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// A store pre-populated with the default categories.
    pub fn seeded() -> Self {
        let mut tables = Tables::default();
        for name in SEED_CATEGORIES {
            tables.categories.insert(|id| Category {
                id,
                name: name.to_string(),
            });
        }
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    pub fn product_repo(&self) -> InMemoryProductRepo {
        InMemoryProductRepo {
            store: self.clone(),
        }
    }

    pub fn category_repo(&self) -> InMemoryCategoryRepo {
        InMemoryCategoryRepo {
            store: self.clone(),
        }
    }
}

/// In-memory [`ProductRepository`].
#[derive(Clone)]
pub struct InMemoryProductRepo {
    store: MemoryStore,
}

#[async_trait]
impl ProductRepository for InMemoryProductRepo {
    async fn list(&self) -> Result<Vec<Product>, sqlx::Error> {
        Ok(self.store.tables.read().await.products.list())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        Ok(self.store.tables.read().await.products.get(id))
    }

    async fn create(&self, product: &Product) -> Result<Product, sqlx::Error> {
        let mut tables = self.store.tables.write().await;
        tables.ensure_category_exists(product.category_id)?;
        let row = tables.products.insert(|id| Product {
            id,
            ..product.clone()
        });
        tracing::debug!(product_id = row.id, "Inserted product in memory");
        Ok(row)
    }

    async fn update(&self, product: &Product) -> Result<Option<Product>, sqlx::Error> {
        let mut tables = self.store.tables.write().await;
        if !tables.products.contains(product.id) {
            return Ok(None);
        }
        tables.ensure_category_exists(product.category_id)?;
        Ok(tables.products.replace(product.id, product.clone()))
    }

    async fn remove(&self, product: &Product) -> Result<bool, sqlx::Error> {
        Ok(self.store.tables.write().await.products.delete(product.id))
    }
}

/// In-memory [`CategoryRepository`].
#[derive(Clone)]
pub struct InMemoryCategoryRepo {
    store: MemoryStore,
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn list(&self) -> Result<Vec<Category>, sqlx::Error> {
        Ok(self.store.tables.read().await.categories.list())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        Ok(self.store.tables.read().await.categories.get(id))
    }

    async fn create(&self, category: &Category) -> Result<Category, sqlx::Error> {
        let mut tables = self.store.tables.write().await;
        tables.ensure_name_free(&category.name, None)?;
        Ok(tables.categories.insert(|id| Category {
            id,
            name: category.name.clone(),
        }))
    }

    async fn update(&self, category: &Category) -> Result<Option<Category>, sqlx::Error> {
        let mut tables = self.store.tables.write().await;
        if !tables.categories.contains(category.id) {
            return Ok(None);
        }
        tables.ensure_name_free(&category.name, Some(category.id))?;
        Ok(tables.categories.replace(category.id, category.clone()))
    }

    async fn remove(&self, category: &Category) -> Result<bool, sqlx::Error> {
        let mut tables = self.store.tables.write().await;
        if !tables.categories.contains(category.id) {
            return Ok(false);
        }
        tables.ensure_category_unreferenced(category.id)?;
        Ok(tables.categories.delete(category.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str) -> Product {
        Product {
            id: 0,
            name: name.to_string(),
            description: "A test product".to_string(),
            price: 9.5,
            stock: 3,
            image: None,
            category_id: 1,
        }
    }

    fn category(id: DbId, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
        }
    }

    /// SQLSTATE and constraint name of a constraint failure.
    fn violation(err: sqlx::Error) -> (String, String) {
        match err {
            sqlx::Error::Database(db_err) => (
                db_err.code().unwrap_or_default().into_owned(),
                db_err.constraint().unwrap_or_default().to_string(),
            ),
            other => panic!("expected a database error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids_and_lists_in_order() {
        let repo = MemoryStore::seeded().product_repo();
        let first = repo.create(&product("Pencil")).await.unwrap();
        let second = repo.create(&product("Eraser")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Pencil", "Eraser"]);
    }

    #[tokio::test]
    async fn test_create_ignores_incoming_id() {
        let repo = MemoryStore::seeded().product_repo();
        let mut input = product("Pencil");
        input.id = 99;
        let stored = repo.create(&input).await.unwrap();
        assert_eq!(stored.id, 1);
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_row_returns_none() {
        let repo = MemoryStore::seeded().product_repo();
        let mut ghost = product("Ghost");
        ghost.id = 7;
        assert!(repo.update(&ghost).await.unwrap().is_none());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_every_field() {
        let repo = MemoryStore::seeded().product_repo();
        let mut stored = repo.create(&product("Pencil")).await.unwrap();
        stored.price = 1.25;
        stored.image = Some("pencil.png".to_string());
        stored.category_id = 2;

        let updated = repo.update(&stored).await.unwrap().unwrap();
        assert_eq!(updated, stored);
        assert_eq!(repo.find_by_id(stored.id).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn test_remove_reports_whether_a_row_was_deleted() {
        let repo = MemoryStore::seeded().product_repo();
        let stored = repo.create(&product("Pencil")).await.unwrap();

        assert!(repo.remove(&stored).await.unwrap());
        assert!(!repo.remove(&stored).await.unwrap());
    }

    #[tokio::test]
    async fn test_seeded_categories() {
        let repo = MemoryStore::seeded().category_repo();
        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, SEED_CATEGORIES);
    }

    #[tokio::test]
    async fn test_product_with_unknown_category_is_rejected() {
        let repo = MemoryStore::seeded().product_repo();
        let mut orphan = product("Orphan");
        orphan.category_id = 999;

        let err = repo.create(&orphan).await.unwrap_err();

        assert_eq!(
            violation(err),
            (FOREIGN_KEY_VIOLATION.to_string(), FK_PRODUCTS_CATEGORY.to_string())
        );
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_to_unknown_category_keeps_the_row() {
        let repo = MemoryStore::seeded().product_repo();
        let stored = repo.create(&product("Pencil")).await.unwrap();
        let moved = Product {
            category_id: 42,
            ..stored.clone()
        };

        let err = repo.update(&moved).await.unwrap_err();

        assert_eq!(violation(err).0, FOREIGN_KEY_VIOLATION);
        assert_eq!(repo.find_by_id(stored.id).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn test_duplicate_category_name_is_rejected() {
        let repo = MemoryStore::seeded().category_repo();

        let err = repo.create(&category(0, "Electronics")).await.unwrap_err();

        assert_eq!(
            violation(err),
            (UNIQUE_VIOLATION.to_string(), UQ_CATEGORIES_NAME.to_string())
        );
        assert_eq!(repo.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_rename_checks_other_categories_only() {
        let repo = MemoryStore::seeded().category_repo();

        let same = repo.update(&category(2, "Electronics")).await.unwrap();
        assert_eq!(same, Some(category(2, "Electronics")));

        let err = repo.update(&category(2, "Accessories")).await.unwrap_err();
        assert_eq!(violation(err).1, UQ_CATEGORIES_NAME);
    }

    #[tokio::test]
    async fn test_referenced_category_cannot_be_removed() {
        let store = MemoryStore::seeded();
        let products = store.product_repo();
        let categories = store.category_repo();
        let stored = products.create(&product("Pencil")).await.unwrap();

        let err = categories
            .remove(&category(1, "School Supplies"))
            .await
            .unwrap_err();
        assert_eq!(
            violation(err),
            (FOREIGN_KEY_VIOLATION.to_string(), FK_PRODUCTS_CATEGORY.to_string())
        );
        assert!(categories.find_by_id(1).await.unwrap().is_some());

        products.remove(&stored).await.unwrap();
        assert!(categories.remove(&category(1, "School Supplies")).await.unwrap());
    }
}
