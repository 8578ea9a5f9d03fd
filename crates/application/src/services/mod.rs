//! Use-case services.
//!
//! A service orchestrates one repository and the mapping profile. Services
//! hold no state beyond their injected repository and perform no retries:
//! storage errors surface to the caller as [`ApplicationError::Database`].
//!
//! [`ApplicationError::Database`]: crate::error::ApplicationError::Database

pub mod category_service;
pub mod product_service;

pub use category_service::{CategoryService, CategoryServiceImpl};
pub use product_service::{ProductService, ProductServiceImpl};
