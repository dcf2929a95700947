//! Orderings used by the sorted product listing.
//!
//! The set of orders is closed, so dispatch is a plain `match` onto comparator
//! functions. Every comparator falls back to the case-insensitive SKU on ties,
//! which makes each one a strict total order over distinct products.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::InventoryError;

use crate::product::Product;

/// Comparator signature shared by every ordering.
pub type Comparator = fn(&Product, &Product) -> Ordering;

/// Key selecting one of the listing orders.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Case-insensitive SKU, ascending. The store's natural order.
    #[default]
    Sku,
    /// Price, ascending.
    Price,
    /// `price × quantity`, descending.
    Value,
    /// Case-insensitive name, ascending.
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Sku, SortKey::Price, SortKey::Value, SortKey::Name];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Sku => "sku",
            SortKey::Price => "price",
            SortKey::Value => "value",
            SortKey::Name => "name",
        }
    }

    /// Lenient parse: anything unrecognized selects the natural SKU order.
    pub fn parse(input: &str) -> SortKey {
        input.parse().unwrap_or_default()
    }

    pub fn comparator(self) -> Comparator {
        match self {
            SortKey::Sku => by_sku,
            SortKey::Price => by_price,
            SortKey::Value => by_value_desc,
            SortKey::Name => by_name,
        }
    }

    /// Sort a materialized view in place. Never touches the store.
    pub fn sort(self, products: &mut [Product]) {
        products.sort_by(self.comparator());
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sku" => Ok(SortKey::Sku),
            "price" => Ok(SortKey::Price),
            "value" => Ok(SortKey::Value),
            "name" => Ok(SortKey::Name),
            other => Err(InventoryError::validation(format!(
                "unknown sort key '{other}' (expected sku/price/value/name)"
            ))),
        }
    }
}

fn by_sku(a: &Product, b: &Product) -> Ordering {
    a.sku().cmp(b.sku())
}

fn by_price(a: &Product, b: &Product) -> Ordering {
    a.price().total_cmp(&b.price()).then_with(|| by_sku(a, b))
}

fn by_value_desc(a: &Product, b: &Product) -> Ordering {
    b.value().total_cmp(&a.value()).then_with(|| by_sku(a, b))
}

fn by_name(a: &Product, b: &Product) -> Ordering {
    a.name()
        .to_lowercase()
        .cmp(&b.name().to_lowercase())
        .then_with(|| by_sku(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skus(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.sku().as_str()).collect()
    }

    fn sample() -> Vec<Product> {
        vec![
            Product::new("c3", "bolt", "Hardware", 0.5, 400),
            Product::new("A1", "Widget", "Tools", 10.0, 2),
            Product::new("b2", "anvil", "Tools", 1.0, 50),
        ]
    }

    #[test]
    fn sku_order_ignores_case() {
        let mut products = sample();
        SortKey::Sku.sort(&mut products);
        assert_eq!(skus(&products), vec!["A1", "b2", "c3"]);
    }

    #[test]
    fn price_order_is_ascending() {
        let mut products = sample();
        SortKey::Price.sort(&mut products);
        assert_eq!(skus(&products), vec!["c3", "b2", "A1"]);
    }

    #[test]
    fn value_order_is_descending() {
        let mut products = vec![
            Product::new("A", "a", "x", 10.0, 2),
            Product::new("B", "b", "x", 1.0, 50),
        ];
        SortKey::Value.sort(&mut products);
        assert_eq!(skus(&products), vec!["B", "A"]);
    }

    #[test]
    fn name_order_ignores_case() {
        let mut products = sample();
        SortKey::Name.sort(&mut products);
        assert_eq!(skus(&products), vec!["b2", "c3", "A1"]);
    }

    #[test]
    fn ties_keep_every_product_and_break_on_sku() {
        let mut products = vec![
            Product::new("z", "same", "x", 1.0, 1),
            Product::new("m", "same", "x", 1.0, 1),
            Product::new("a", "same", "x", 1.0, 1),
        ];
        for key in SortKey::ALL {
            key.sort(&mut products);
            assert_eq!(skus(&products), vec!["a", "m", "z"], "key {key}");
        }
    }

    #[test]
    fn parse_falls_back_to_sku() {
        assert_eq!(SortKey::parse("price"), SortKey::Price);
        assert_eq!(SortKey::parse(" VALUE "), SortKey::Value);
        assert_eq!(SortKey::parse("quantity"), SortKey::Sku);
        assert_eq!(SortKey::parse(""), SortKey::Sku);
    }

    #[test]
    fn strict_parse_rejects_unknown_keys() {
        match "weight".parse::<SortKey>() {
            Err(InventoryError::Validation(msg)) => assert!(msg.contains("weight")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
