use serde::{Deserialize, Serialize};

use stockroom_core::Sku;

/// Quantities strictly below this are reported as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// One tracked SKU.
///
/// The SKU never changes once the record exists; only the quantity is mutated,
/// and only by the store that owns the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    sku: Sku,
    name: String,
    category: String,
    price: f64,
    quantity: u32,
}

impl Product {
    pub fn new(
        sku: impl Into<Sku>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Monetary value on hand: `price × quantity`.
    pub fn value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Derived from the current quantity, never cached.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_price_times_quantity() {
        let product = Product::new("A1", "Widget", "Tools", 2.5, 4);
        assert_eq!(product.value(), 10.0);

        let empty = Product::new("A2", "Gadget", "Tools", 99.0, 0);
        assert_eq!(empty.value(), 0.0);
    }

    #[test]
    fn low_stock_is_strictly_below_threshold() {
        assert!(Product::new("A", "a", "c", 1.0, 9).is_low_stock());
        assert!(!Product::new("B", "b", "c", 1.0, LOW_STOCK_THRESHOLD).is_low_stock());
    }

    #[test]
    fn low_stock_follows_quantity_changes() {
        let mut product = Product::new("A1", "Widget", "Tools", 5.0, 3);
        assert!(product.is_low_stock());
        product.set_quantity(20);
        assert!(!product.is_low_stock());
    }

    #[test]
    fn sku_lookup_ignores_case() {
        let product = Product::new("ab-1", "Bolt", "Hardware", 0.1, 100);
        assert_eq!(product.sku(), &Sku::new("AB-1"));
        assert_eq!(product.sku().as_str(), "ab-1");
    }
}
