use helpapp_db::models::category::Category;
use helpapp_db::models::product::Product;

use crate::dtos::{CategoryDto, ProductDto};

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        let Product {
            id,
            name,
            description,
            price,
            stock,
            image,
            category_id,
        } = product;
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

impl From<ProductDto> for Product {
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

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        let Category { id, name } = category;
        Self { id, name }
    }
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        let CategoryDto { id, name } = dto;
        Self { id, name }
    }
}
