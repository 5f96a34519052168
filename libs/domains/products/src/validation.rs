//! Request validation.
//!
//! Rules are declared with `validator` attributes on the command types and
//! evaluated together, so a single response lists every problem. Field names
//! are reported in PascalCase (`StockQuantity`), the same casing the messages
//! use.

use axum_helpers::FieldErrors;
use rust_decimal::Decimal;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{ProductError, ProductResult};
use crate::models::price_violation;

/// Key for errors that do not belong to a single property.
pub const GENERAL_KEY: &str = "General";

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed("Name is required.")));
    }
    Ok(())
}

/// Positive, and storable in the `DECIMAL(18,2)` column.
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    match price_violation(*price) {
        Some((code, message)) => Err(ValidationError::new(code).with_message(Cow::Owned(message))),
        None => Ok(()),
    }
}

/// Runs every rule on `command`; any failure becomes [`ProductError::Validation`].
pub fn validate_command<T: Validate>(command: &T) -> ProductResult<()> {
    command
        .validate()
        .map_err(|errors| ProductError::Validation(to_field_errors(&errors)))
}

pub fn to_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut grouped = FieldErrors::new();

    for (field, field_errors) in errors.field_errors() {
        let property = property_name(&field);
        let messages = grouped.entry(property.clone()).or_default();

        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid.", property));
            messages.push(message);
        }
    }

    grouped
}

/// `stock_quantity` -> `StockQuantity`; empty -> [`GENERAL_KEY`].
fn property_name(field: &str) -> String {
    if field.is_empty() || field == "__all__" {
        return GENERAL_KEY.to_string();
    }

    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
