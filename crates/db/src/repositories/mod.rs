//! Repository layer.
//!
//! Each entity has an `async_trait` repository contract plus two
//! implementations: a Postgres one holding a [`PgPool`](sqlx::PgPool) and an
//! in-memory one, backed by a shared [`MemoryStore`], used by tests and by
//! the `memory` storage backend. All operations report failures as
//! [`sqlx::Error`] so callers handle a single error type regardless of the
//! backing store.

pub mod category_repo;
pub mod memory;
pub mod product_repo;

pub use category_repo::{CategoryRepo, CategoryRepository};
pub use memory::{InMemoryCategoryRepo, InMemoryProductRepo, MemoryStore};
pub use product_repo::{ProductRepo, ProductRepository};
