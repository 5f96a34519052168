//! SeaORM entity for the `products` table.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use crate::models::Product;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(500))")]
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub price: Decimal,
    pub stock_quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Product::from_storage(
            model.id,
            model.name,
            model.description,
            model.price,
            model.stock_quantity,
        )
    }
}

impl ActiveModel {
    /// Insert form: the id is left to the database.
    pub fn for_insert(product: &Product) -> Self {
        Self {
            id: NotSet,
            name: Set(product.name().to_string()),
            description: Set(product.description().to_string()),
            price: Set(product.price()),
            stock_quantity: Set(product.stock_quantity()),
        }
    }

    /// Update form: every column is written.
    pub fn for_update(product: &Product) -> Self {
        Self {
            id: Set(product.id()),
            ..Self::for_insert(product)
        }
    }
}
