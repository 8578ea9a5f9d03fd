//! Domain primitives shared by every layer of the product catalogue backend.

pub mod error;
pub mod types;
