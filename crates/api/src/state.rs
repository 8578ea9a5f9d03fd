//! Shared application state and the composition root.
//!
//! [`AppState::build`] is the single place where abstractions are bound to
//! implementations: repositories → services → mediator handlers.

use std::sync::Arc;

use helpapp_application::products::register_product_handlers;
use helpapp_application::services::{
    CategoryService, CategoryServiceImpl, ProductService, ProductServiceImpl,
};
use helpapp_application::Mediator;
use helpapp_db::repositories::{
    CategoryRepo, CategoryRepository, MemoryStore, ProductRepo, ProductRepository,
};
use helpapp_db::DbPool;
use tokio_util::sync::CancellationToken;

use crate::config::ServerConfig;

/// The repository implementations chosen for this process.
#[derive(Clone)]
pub struct Repositories {
    pub products: Arc<dyn ProductRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    /// Present for the Postgres backend; used by the health check.
    pub pool: Option<DbPool>,
}

impl Repositories {
    pub fn postgres(pool: DbPool) -> Self {
        Self {
            products: Arc::new(ProductRepo::new(pool.clone())),
            categories: Arc::new(CategoryRepo::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Process-local repositories over one store, with the default
    /// categories seeded.
    pub fn in_memory() -> Self {
        let store = MemoryStore::seeded();
        Self {
            products: Arc::new(store.product_repo()),
            categories: Arc::new(store.category_repo()),
            pool: None,
        }
    }
}

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, when running on Postgres.
    pub pool: Option<DbPool>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Dispatches product commands and queries.
    pub mediator: Mediator,
    /// Category use cases (called directly, without the mediator).
    pub categories: Arc<dyn CategoryService>,
    /// Cancelled when in-flight requests must be abandoned during shutdown.
    pub shutdown: CancellationToken,
}

impl AppState {
    /// Wire services and request handlers on top of `repositories`.
    pub fn build(repositories: Repositories, config: ServerConfig) -> Self {
        let Repositories {
            products,
            categories,
            pool,
        } = repositories;

        let product_service: Arc<dyn ProductService> = Arc::new(ProductServiceImpl::new(products));
        let category_service: Arc<dyn CategoryService> =
            Arc::new(CategoryServiceImpl::new(categories));

        let mediator = register_product_handlers(Mediator::builder(), product_service).build();

        Self {
            pool,
            config: Arc::new(config),
            mediator,
            categories: category_service,
            shutdown: CancellationToken::new(),
        }
    }

    /// Cancellation token handed to a single request.
    pub fn request_token(&self) -> CancellationToken {
        self.shutdown.child_token()
    }
}
