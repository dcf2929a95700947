//! Read-only views over the store: sorted listing, low-stock listing,
//! statistics and recent history.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::journal::TransactionRecord;
use crate::ordering::SortKey;
use crate::product::Product;
use crate::store::Inventory;

/// Value held in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub value: f64,
    /// Share of the total inventory value, in percent.
    ///
    /// `None` when the total value is zero and the share is undefined.
    pub percent_of_total: Option<f64>,
}

/// Aggregate statistics over every product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total_products: usize,
    pub total_value: f64,
    pub per_category: BTreeMap<String, CategoryBreakdown>,
}

impl Inventory {
    /// All products, ordered by `key`.
    pub fn list_sorted(&self, key: SortKey) -> Vec<Product> {
        let mut products: Vec<Product> = self.products().cloned().collect();
        key.sort(&mut products);
        products
    }

    /// Products whose current quantity is below the low-stock threshold, in
    /// store order.
    pub fn low_stock_alerts(&self) -> Vec<Product> {
        self.products()
            .filter(|p| p.is_low_stock())
            .cloned()
            .collect()
    }

    pub fn statistics(&self) -> InventoryStats {
        let mut total_value = 0.0;
        let mut category_values: BTreeMap<String, f64> = BTreeMap::new();

        for product in self.products() {
            let value = product.value();
            total_value += value;
            *category_values
                .entry(product.category().to_string())
                .or_insert(0.0) += value;
        }

        let per_category = category_values
            .into_iter()
            .map(|(category, value)| {
                // An overflowed (infinite) total has no meaningful share either.
                let defined = total_value > 0.0 && total_value.is_finite();
                let percent_of_total = defined.then(|| value / total_value * 100.0);
                (
                    category,
                    CategoryBreakdown {
                        value,
                        percent_of_total,
                    },
                )
            })
            .collect();

        InventoryStats {
            total_products: self.len(),
            total_value,
            per_category,
        }
    }

    /// Up to `n` most recent transactions, newest first.
    pub fn recent_transactions(&self, n: usize) -> Vec<TransactionRecord> {
        self.journal().recent(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn skus(products: &[Product]) -> Vec<String> {
        products.iter().map(|p| p.sku().to_string()).collect()
    }

    #[test]
    fn list_sorted_by_value_is_descending() {
        let mut inventory = Inventory::new();
        inventory.add_product(Product::new("A", "a", "X", 10.0, 2)).unwrap();
        inventory.add_product(Product::new("B", "b", "X", 1.0, 50)).unwrap();

        assert_eq!(skus(&inventory.list_sorted(SortKey::Value)), vec!["B", "A"]);
        assert_eq!(skus(&inventory.list_sorted(SortKey::Sku)), vec!["A", "B"]);
    }

    #[test]
    fn unknown_sort_key_lists_in_sku_order() {
        let mut inventory = Inventory::new();
        inventory.add_product(Product::new("b", "z", "X", 1.0, 1)).unwrap();
        inventory.add_product(Product::new("A", "y", "X", 2.0, 1)).unwrap();

        let listed = inventory.list_sorted(SortKey::parse("colour"));
        assert_eq!(skus(&listed), vec!["A", "b"]);
    }

    #[test]
    fn low_stock_reflects_current_quantity() {
        let mut inventory = Inventory::new();
        inventory
            .add_product(Product::new("A1", "Widget", "Tools", 5.0, 3))
            .unwrap();
        assert_eq!(skus(&inventory.low_stock_alerts()), vec!["A1"]);

        inventory.update_quantity("A1", 20).unwrap();
        assert!(inventory.low_stock_alerts().is_empty());

        inventory.update_quantity("A1", 9).unwrap();
        assert_eq!(skus(&inventory.low_stock_alerts()), vec!["A1"]);

        inventory.undo_last().unwrap();
        assert!(inventory.low_stock_alerts().is_empty());
    }

    #[test]
    fn statistics_single_category() {
        let mut inventory = Inventory::new();
        inventory.add_product(Product::new("A", "a", "X", 10.0, 3)).unwrap();
        inventory.add_product(Product::new("B", "b", "X", 7.0, 10)).unwrap();

        let stats = inventory.statistics();
        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.total_value, 100.0);
        let x = &stats.per_category["X"];
        assert_eq!(x.value, 100.0);
        assert_eq!(x.percent_of_total, Some(100.0));
    }

    #[test]
    fn statistics_splits_by_category() {
        let mut inventory = Inventory::new();
        inventory.add_product(Product::new("A", "a", "Tools", 1.0, 25)).unwrap();
        inventory.add_product(Product::new("B", "b", "Toys", 3.0, 25)).unwrap();

        let stats = inventory.statistics();
        assert_eq!(stats.per_category["Tools"].percent_of_total, Some(25.0));
        assert_eq!(stats.per_category["Toys"].percent_of_total, Some(75.0));
    }

    #[test]
    fn statistics_on_empty_store() {
        let stats = Inventory::new().statistics();
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.total_value, 0.0);
        assert!(stats.per_category.is_empty());
    }

    #[test]
    fn zero_total_value_leaves_percentage_undefined() {
        let mut inventory = Inventory::new();
        inventory.add_product(Product::new("A", "a", "X", 0.0, 5)).unwrap();
        inventory.add_product(Product::new("B", "b", "Y", 4.0, 0)).unwrap();

        let stats = inventory.statistics();
        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.per_category["X"].percent_of_total, None);
        assert_eq!(stats.per_category["Y"].percent_of_total, None);
    }

    #[test]
    fn overflowed_total_value_leaves_percentage_undefined() {
        let mut inventory = Inventory::new();
        inventory.add_product(Product::new("A", "a", "X", 1e308, 10)).unwrap();
        inventory.add_product(Product::new("B", "b", "Y", 1.0, 1)).unwrap();

        let stats = inventory.statistics();
        assert!(stats.total_value.is_infinite());
        assert_eq!(stats.per_category["X"].percent_of_total, None);
        assert_eq!(stats.per_category["Y"].percent_of_total, None);
    }

    #[test]
    fn recent_transactions_caps_at_log_length() {
        let mut inventory = Inventory::new();
        inventory.add_product(Product::new("A", "a", "X", 1.0, 1)).unwrap();
        inventory.add_product(Product::new("B", "b", "X", 1.0, 1)).unwrap();
        inventory.update_quantity("A", 5).unwrap();

        let recent = inventory.recent_transactions(1000);
        let messages: Vec<&str> = recent.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "UPDATE: A - Quantity changed from 1 to 5",
                "ADD: B - b (Qty: 1)",
                "ADD: A - a (Qty: 1)",
            ]
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: every ordering is a permutation of the store, sorted
        /// according to its comparator.
        #[test]
        fn sorted_views_are_ordered_permutations(
            rows in prop::collection::vec(("[a-z]{1,4}", "[A-Za-z]{1,6}", 0u32..10_000, 0u32..200), 0..30)
        ) {
            let mut inventory = Inventory::new();
            for (sku, name, cents, quantity) in rows {
                let _ = inventory.add_product(Product::new(sku, name, "C", f64::from(cents) / 100.0, quantity));
            }

            for key in SortKey::ALL {
                let listed = inventory.list_sorted(key);
                prop_assert_eq!(listed.len(), inventory.len());
                for pair in listed.windows(2) {
                    prop_assert!(key.comparator()(&pair[0], &pair[1]).is_lt());
                }
            }
        }
    }
}
