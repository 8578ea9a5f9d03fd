//! Transfer objects exchanged at the service boundary.

pub mod category_dto;
pub mod product_dto;

pub use category_dto::CategoryDto;
pub use product_dto::ProductDto;

use helpapp_core::error::CoreError;
use validator::Validate;

/// Run the DTO's declarative field rules, flattening failures into
/// [`CoreError::Validation`].
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), CoreError> {
    dto.validate()
        .map_err(|errors| CoreError::Validation(errors.to_string()))
}
