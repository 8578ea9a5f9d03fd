//! Application layer for the product catalogue.
//!
//! Requests flow `Mediator::send` → request handler → service → mapping +
//! repository. Transport layers only ever see DTOs, commands and queries;
//! entities stay behind the services.

pub mod dtos;
pub mod error;
pub mod mappings;
pub mod mediator;
pub mod products;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use mediator::{Mediator, MediatorBuilder, Request, RequestHandler};
