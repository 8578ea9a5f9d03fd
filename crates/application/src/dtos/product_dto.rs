use helpapp_core::types::DbId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Flat, serializable projection of a product.
///
/// `id` is ignored when the DTO is used to add a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductDto {
    #[serde(default)]
    pub id: DbId,
    #[validate(length(min = 3, max = 100))]
    pub name: String,
    #[validate(length(min = 5, max = 200))]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub stock: i32,
    #[validate(length(max = 250))]
    pub image: Option<String>,
    #[validate(range(min = 1))]
    pub category_id: DbId,
}
