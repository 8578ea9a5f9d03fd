//! Write-side product requests.

use helpapp_core::types::DbId;

use crate::dtos::ProductDto;
use crate::mediator::Request;

/// Add a new product. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreateCommand {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub image: Option<String>,
    pub category_id: DbId,
}

impl Request for ProductCreateCommand {
    type Response = ProductDto;
    const ABANDON_ON_CANCEL: bool = false;
}

/// Overwrite every field of the product identified by `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdateCommand {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub image: Option<String>,
    pub category_id: DbId,
}

impl Request for ProductUpdateCommand {
    type Response = ProductDto;
    const ABANDON_ON_CANCEL: bool = false;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductRemoveCommand {
    pub id: DbId,
}

impl ProductRemoveCommand {
    pub fn new(id: DbId) -> Self {
        Self { id }
    }
}

impl Request for ProductRemoveCommand {
    type Response = ();
    const ABANDON_ON_CANCEL: bool = false;
}
