//! Requests that change the catalog.
//!
//! Bodies are lenient: missing members fall back to their defaults so that the
//! validator, not the JSON decoder, reports what is wrong with them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::{validate_not_blank, validate_price};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProductCommand {
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 100, message = "Name must not exceed 100 characters.")
    )]
    #[schema(example = "Widget")]
    pub name: String,

    #[validate(length(max = 500, message = "Description must not exceed 500 characters."))]
    #[schema(example = "")]
    pub description: String,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64, example = 9.99)]
    pub price: Decimal,

    #[validate(range(min = 0, message = "StockQuantity must not be negative."))]
    #[schema(example = 5)]
    pub stock_quantity: i32,
}

/// Full replacement of a product's mutable fields.
///
/// `id` must equal the id in the route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProductCommand {
    #[schema(example = 1)]
    pub id: i32,

    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 100, message = "Name must not exceed 100 characters.")
    )]
    #[schema(example = "Widget")]
    pub name: String,

    #[validate(length(max = 500, message = "Description must not exceed 500 characters."))]
    pub description: String,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64, example = 12.5)]
    pub price: Decimal,

    #[validate(range(min = 0, message = "StockQuantity must not be negative."))]
    pub stock_quantity: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteProductCommand {
    pub id: i32,
}
