//! Entity to wire-format projection.

use crate::models::{Product, ProductDto};

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            name: product.name().to_string(),
            description: product.description().to_string(),
            price: product.price(),
            stock_quantity: product.stock_quantity(),
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        ProductDto::from(&product)
    }
}

pub fn to_dtos(products: &[Product]) -> Vec<ProductDto> {
    products.iter().map(ProductDto::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_maps_every_field() {
        let product = Product::from_storage(7, "Widget".into(), "small".into(), Decimal::new(999, 2), 5);
        let dto = ProductDto::from(&product);

        assert_eq!(
            dto,
            ProductDto {
                id: 7,
                name: "Widget".into(),
                description: "small".into(),
                price: Decimal::new(999, 2),
                stock_quantity: 5,
            }
        );
    }

    #[test]
    fn test_to_dtos_keeps_order() {
        let products = vec![
            Product::from_storage(2, "b".into(), String::new(), Decimal::ONE, 0),
            Product::from_storage(1, "a".into(), String::new(), Decimal::ONE, 0),
        ];
        let ids: Vec<i32> = to_dtos(&products).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
