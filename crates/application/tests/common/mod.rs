//! Shared fixtures for application-layer tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use helpapp_application::dtos::ProductDto;
use helpapp_application::products::register_product_handlers;
use helpapp_application::services::{ProductService, ProductServiceImpl};
use helpapp_application::Mediator;
use helpapp_db::models::product::Product;
use helpapp_db::repositories::ProductRepository;

/// A repository call as observed by [`RecordingProductRepo`].
#[derive(Debug, Clone, PartialEq)]
pub enum RepoCall {
    List,
    FindById(i64),
    Create(Product),
    Update(Product),
    Remove(Product),
}

/// Product repository that records every call and serves a fixed row set.
///
/// `create` assigns `id = 100 + number of creates so far`; `update` and
/// `remove` only succeed for ids present in the initial rows.
#[derive(Default)]
pub struct RecordingProductRepo {
    rows: Vec<Product>,
    calls: Mutex<Vec<RepoCall>>,
    fail_storage: bool,
}

impl RecordingProductRepo {
    pub fn with_rows(rows: Vec<Product>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Every call fails with `sqlx::Error::PoolTimedOut`.
    pub fn failing() -> Self {
        Self {
            fail_storage: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RepoCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RepoCall) -> Result<(), sqlx::Error> {
        self.calls.lock().unwrap().push(call);
        if self.fail_storage {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }

    fn created_count(&self) -> i64 {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, RepoCall::Create(_)))
            .count() as i64
    }
}

#[async_trait]
impl ProductRepository for RecordingProductRepo {
    async fn list(&self) -> Result<Vec<Product>, sqlx::Error> {
        self.record(RepoCall::List)?;
        Ok(self.rows.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error> {
        self.record(RepoCall::FindById(id))?;
        Ok(self.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, product: &Product) -> Result<Product, sqlx::Error> {
        self.record(RepoCall::Create(product.clone()))?;
        Ok(Product {
            id: 100 + self.created_count(),
            ..product.clone()
        })
    }

    async fn update(&self, product: &Product) -> Result<Option<Product>, sqlx::Error> {
        self.record(RepoCall::Update(product.clone()))?;
        Ok(self
            .rows
            .iter()
            .any(|p| p.id == product.id)
            .then(|| product.clone()))
    }

    async fn remove(&self, product: &Product) -> Result<bool, sqlx::Error> {
        self.record(RepoCall::Remove(product.clone()))?;
        Ok(self.rows.iter().any(|p| p.id == product.id))
    }
}

pub fn product(id: i64, name: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: format!("{name} description"),
        price: 4.5,
        stock: 20,
        image: None,
        category_id: 1,
    }
}

pub fn product_dto(id: i64, name: &str) -> ProductDto {
    ProductDto::from(product(id, name))
}

/// Service over a recording repository, returning both so tests can inspect calls.
pub fn service_with(repo: RecordingProductRepo) -> (Arc<RecordingProductRepo>, ProductServiceImpl) {
    let repo = Arc::new(repo);
    let service = ProductServiceImpl::new(Arc::clone(&repo) as Arc<dyn ProductRepository>);
    (repo, service)
}

/// Mediator with the product handlers bound to a service over `repo`.
pub fn mediator_with(repo: RecordingProductRepo) -> (Arc<RecordingProductRepo>, Mediator) {
    let (repo, service) = service_with(repo);
    let service: Arc<dyn ProductService> = Arc::new(service);
    let mediator = register_product_handlers(Mediator::builder(), service).build();
    (repo, mediator)
}
