use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ProductError, ProductResult};

pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// Fractional digits the `DECIMAL(18,2)` price column keeps.
pub const PRICE_MAX_SCALE: u32 = 2;
/// Integer digits the price column keeps.
pub const PRICE_MAX_INTEGER_DIGITS: u32 = 16;

/// Product aggregate root.
///
/// Fields are private: a `Product` only exists in a valid state. New products
/// come from [`Product::new`] with id `0` until storage assigns one; products
/// read back from storage are rebuilt through [`Product::from_storage`].
///
/// Invariants:
/// - `name` is not blank and at most 100 characters
/// - `description` is at most 500 characters (may be empty)
/// - `price` is strictly positive, has at most 2 decimal places and at most
///   16 integer digits
/// - `stock_quantity` is not negative
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: i32,
    name: String,
    description: String,
    price: Decimal,
    stock_quantity: i32,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock_quantity: i32,
    ) -> ProductResult<Self> {
        let name = name.into();
        let description = description.into();

        check_name(&name)?;
        check_description(&description)?;
        check_price(price)?;
        check_stock(stock_quantity)?;

        Ok(Self {
            id: 0,
            name,
            description,
            price,
            stock_quantity,
        })
    }

    /// Rebuilds a product from persisted values without re-checking them.
    pub(crate) fn from_storage(
        id: i32,
        name: String,
        description: String,
        price: Decimal,
        stock_quantity: i32,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            stock_quantity,
        }
    }

    pub(crate) fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Replaces name, description and price together, or changes nothing.
    pub fn update_details(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
    ) -> ProductResult<()> {
        let name = name.into();
        let description = description.into();

        check_name(&name)?;
        check_description(&description)?;
        check_price(price)?;

        self.name = name;
        self.description = description;
        self.price = price;
        Ok(())
    }

    pub fn update_stock(&mut self, quantity: i32) -> ProductResult<()> {
        check_stock(quantity)?;
        self.stock_quantity = quantity;
        Ok(())
    }

    /// Storage-assigned identity; `0` before the first save.
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn stock_quantity(&self) -> i32 {
        self.stock_quantity
    }

    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

fn check_name(name: &str) -> ProductResult<()> {
    if name.trim().is_empty() {
        return Err(ProductError::invalid("name", "Name is required."));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ProductError::invalid(
            "name",
            format!("Name must not exceed {} characters.", NAME_MAX_LEN),
        ));
    }
    Ok(())
}

fn check_description(description: &str) -> ProductResult<()> {
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(ProductError::invalid(
            "description",
            format!("Description must not exceed {} characters.", DESCRIPTION_MAX_LEN),
        ));
    }
    Ok(())
}

fn check_price(price: Decimal) -> ProductResult<()> {
    match price_violation(price) {
        Some((_, message)) => Err(ProductError::invalid("price", message)),
        None => Ok(()),
    }
}

/// First price rule `price` breaks, as `(code, message)`.
pub(crate) fn price_violation(price: Decimal) -> Option<(&'static str, String)> {
    if price <= Decimal::ZERO {
        return Some(("greater_than", "Price must be greater than 0.".to_string()));
    }
    if price.normalize().scale() > PRICE_MAX_SCALE {
        return Some((
            "scale",
            format!("Price must not have more than {} decimal places.", PRICE_MAX_SCALE),
        ));
    }
    if price >= Decimal::from(10_i64.pow(PRICE_MAX_INTEGER_DIGITS)) {
        return Some((
            "range",
            format!(
                "Price must not have more than {} digits before the decimal point.",
                PRICE_MAX_INTEGER_DIGITS
            ),
        ));
    }
    None
}

fn check_stock(quantity: i32) -> ProductResult<()> {
    if quantity < 0 {
        return Err(ProductError::invalid(
            "stock_quantity",
            "StockQuantity must not be negative.",
        ));
    }
    Ok(())
}

/// Product as exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = "")]
    pub description: String,
    #[schema(value_type = f64, example = 9.99)]
    pub price: Decimal,
    #[schema(example = 5)]
    pub stock_quantity: i32,
}
