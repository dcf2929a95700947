//! Parsing of operator input.

use stockroom_core::{InventoryError, InventoryResult};

pub fn parse_price(input: &str) -> InventoryResult<f64> {
    let price: f64 = input
        .trim()
        .parse()
        .map_err(|_| InventoryError::validation(format!("'{}' is not a price", input.trim())))?;
    if !price.is_finite() || price < 0.0 {
        return Err(InventoryError::validation(format!(
            "price must be a non-negative amount, got {price}"
        )));
    }
    // Fold "-0" into 0.0 so it never renders as a negative amount.
    Ok(price + 0.0)
}

pub fn parse_quantity(input: &str) -> InventoryResult<u32> {
    input.trim().parse().map_err(|_| {
        InventoryError::validation(format!(
            "'{}' is not a quantity (expected a whole number >= 0)",
            input.trim()
        ))
    })
}

/// Blank input selects `default`.
pub fn parse_count(input: &str, default: usize) -> InventoryResult<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed
        .parse()
        .map_err(|_| InventoryError::validation(format!("'{trimmed}' is not a count")))
}

/// Non-empty trimmed text, or a validation error naming `field`.
pub fn require_text(input: &str, field: &str) -> InventoryResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InventoryError::validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}
