use crate::dtos::ProductDto;
use crate::products::commands::{ProductCreateCommand, ProductUpdateCommand};

/// The create command carries no id; storage assigns one.
impl From<ProductDto> for ProductCreateCommand {
    fn from(dto: ProductDto) -> Self {
        let ProductDto {
            id: _,
            name,
            description,
            price,
            stock,
            image,
            category_id,
        } = dto;
        Self {
            name,
            description,
            price,
            stock,
            image,
            category_id,
        }
    }
}

impl From<ProductDto> for ProductUpdateCommand {
    fn from(dto: ProductDto) -> Self {
        let ProductDto {
            id,
            name,
            description,
            price,
            stock,
            image,
            category_id,
        } = dto;
        Self {
            id,
            name,
            description,
            price,
            stock,
            image,
            category_id,
        }
    }
}

/// `id` exists only in the DTO and is left at its default.
impl From<ProductCreateCommand> for ProductDto {
    fn from(command: ProductCreateCommand) -> Self {
        let ProductCreateCommand {
            name,
            description,
            price,
            stock,
            image,
            category_id,
        } = command;
        Self {
            id: Default::default(),
            name,
            description,
            price,
            stock,
            image,
            category_id,
        }
    }
}

impl From<ProductUpdateCommand> for ProductDto {
    fn from(command: ProductUpdateCommand) -> Self {
        let ProductUpdateCommand {
            id,
            name,
            description,
            price,
            stock,
            image,
            category_id,
        } = command;
        Self {
            id,
            name,
            description,
            price,
            stock,
            image,
            category_id,
        }
    }
}
