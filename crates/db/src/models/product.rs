//! Product entity.

use helpapp_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A product row from the `products` table.
///
/// `id` is assigned by the store on insert; the value carried by an entity
/// passed to `create` is ignored.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub image: Option<String>,
    pub category_id: DbId,
}
