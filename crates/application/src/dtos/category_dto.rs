use helpapp_core::types::DbId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Flat, serializable projection of a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CategoryDto {
    #[serde(default)]
    pub id: DbId,
    #[validate(length(min = 3, max = 100))]
    pub name: String,
}
