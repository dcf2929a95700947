//! Plain-text rendering of the inventory views.

use stockroom_inventory::{InventoryStats, Product, TransactionRecord};

const RULE_WIDTH: usize = 85;

/// Fixed-width product table. `heading` is echoed upper-cased in the title.
pub fn product_table(heading: &str, products: &[Product], currency: &str) -> String {
    let mut out = format!(
        "\n=== PRODUCTS SORTED BY {} ===\n",
        heading.trim().to_uppercase()
    );
    out.push_str(&format!(
        "{:<10} {:<20} {:<15} {:<10} {:<8} {:<10}\n",
        "SKU", "Name", "Category", "Price", "Qty", "Value"
    ));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    for p in products {
        out.push_str(&format!(
            "{:<10} {:<20} {:<15} {currency}{:<9.2} {:<8} {currency}{:<10.2}\n",
            p.sku().as_str(),
            p.name(),
            p.category(),
            p.price(),
            p.quantity(),
            p.value(),
        ));
    }
    out
}

pub fn low_stock_list(products: &[Product]) -> String {
    let mut out = String::from("\n=== LOW STOCK ALERTS ===\n");
    if products.is_empty() {
        out.push_str("No products below the low-stock threshold.\n");
    }
    for (i, p) in products.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} - {} (Current Stock: {})\n",
            i + 1,
            p.sku(),
            p.name(),
            p.quantity()
        ));
    }
    out
}

pub fn history(requested: usize, records: &[TransactionRecord]) -> String {
    let mut out = format!("\n=== LAST {requested} TRANSACTIONS ===\n");
    for record in records {
        out.push_str(&format!("{record}\n"));
    }
    out
}

pub fn statistics(stats: &InventoryStats, currency: &str) -> String {
    let mut out = format!(
        "\n=== INVENTORY STATISTICS ===\nTotal Products: {}\nTotal Inventory Value: {currency}{:.2}\n",
        stats.total_products, stats.total_value
    );
    out.push_str("\nCategory-wise Breakdown:\n");
    for (category, breakdown) in &stats.per_category {
        let share = match breakdown.percent_of_total {
            Some(percent) => format!("{percent:.1}%"),
            None => "n/a".to_string(),
        };
        out.push_str(&format!(
            "• {category}: Value: {currency}{:.2} ({share})\n",
            breakdown.value
        ));
    }
    out
}
