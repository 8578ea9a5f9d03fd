//! Request handlers.
//!
//! Product handlers translate HTTP input into commands and queries and send
//! them through the mediator; category handlers call the category service
//! directly. Both map failures via [`AppError`](crate::error::AppError).

pub mod category;
pub mod product;
