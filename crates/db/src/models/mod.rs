//! Domain entities.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Entities are owned by the store: they are only created,
//! updated and removed through the repositories.

pub mod category;
pub mod product;
