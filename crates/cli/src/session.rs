//! The numbered menu loop.

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::debug;

use stockroom_core::InventoryError;
use stockroom_inventory::{Inventory, Product, SortKey};

use crate::prompt;
use crate::render;
use crate::settings::Settings;

const MENU: &str = "\n=== INVENTORY MANAGEMENT SYSTEM ===
1. Add Product
2. Update Quantity
3. View Products (Sorted)
4. Search Products
5. Low Stock Alerts
6. Transaction History
7. Inventory Statistics
8. Undo Last Update
9. Exit";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Update,
    View,
    Search,
    LowStock,
    History,
    Statistics,
    Undo,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<MenuChoice> {
        let choice = match input.trim() {
            "1" => MenuChoice::Add,
            "2" => MenuChoice::Update,
            "3" => MenuChoice::View,
            "4" => MenuChoice::Search,
            "5" => MenuChoice::LowStock,
            "6" => MenuChoice::History,
            "7" => MenuChoice::Statistics,
            "8" => MenuChoice::Undo,
            "9" => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// One interactive session over a reader/writer pair.
pub struct Session<R, W> {
    input: R,
    output: W,
    inventory: Inventory,
    settings: Settings,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, inventory: Inventory, settings: Settings) -> Self {
        Self {
            input,
            output,
            inventory,
            settings,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Tear down the session, handing back the store.
    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    /// Loop until the operator exits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(line) = self.ask("Enter your choice: ")? else {
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                self.say("Invalid choice")?;
                continue;
            };
            debug!(?choice, "menu choice");

            match choice {
                MenuChoice::Add => self.add_product()?,
                MenuChoice::Update => self.update_quantity()?,
                MenuChoice::View => self.view_products()?,
                MenuChoice::Search => self.say("Search is not available in this version")?,
                MenuChoice::LowStock => self.low_stock()?,
                MenuChoice::History => self.history()?,
                MenuChoice::Statistics => self.statistics()?,
                MenuChoice::Undo => self.undo()?,
                MenuChoice::Exit => {
                    self.say("Goodbye!")?;
                    return Ok(());
                }
            }
        }
    }

    fn say(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{message}").context("failed to write output")?;
        Ok(())
    }

    /// Prompt and read one line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Report a rejected input and abandon the current operation.
    fn reject(&mut self, err: &InventoryError) -> anyhow::Result<()> {
        self.say(&format!("Invalid input: {err}"))
    }

    fn add_product(&mut self) -> anyhow::Result<()> {
        let Some(raw_sku) = self.ask("Enter SKU: ")? else {
            return Ok(());
        };
        let sku = match prompt::require_text(&raw_sku, "SKU") {
            Ok(sku) => sku,
            Err(err) => return self.reject(&err),
        };
        if self.inventory.contains(sku.as_str()) {
            return self.say("SKU already exists");
        }

        let Some(raw_name) = self.ask("Enter Name: ")? else {
            return Ok(());
        };
        let Some(raw_category) = self.ask("Enter Category: ")? else {
            return Ok(());
        };
        let Some(raw_price) = self.ask("Enter Price: ")? else {
            return Ok(());
        };
        let Some(raw_quantity) = self.ask("Enter Quantity: ")? else {
            return Ok(());
        };

        let parsed = prompt::parse_price(&raw_price)
            .and_then(|price| Ok((price, prompt::parse_quantity(&raw_quantity)?)));
        let (price, quantity) = match parsed {
            Ok(values) => values,
            Err(err) => return self.reject(&err),
        };

        let product = Product::new(
            sku.as_str(),
            raw_name.trim(),
            raw_category.trim(),
            price,
            quantity,
        );
        match self.inventory.add_product(product) {
            Ok(outcome) => {
                if outcome.low_stock {
                    self.say(&format!("Low stock alert for {sku}!"))?;
                }
                self.say("Product added successfully!")
            }
            Err(InventoryError::DuplicateSku(_)) => self.say("SKU already exists"),
            Err(err) => self.reject(&err),
        }
    }

    fn update_quantity(&mut self) -> anyhow::Result<()> {
        let Some(raw_sku) = self.ask("Enter SKU to update: ")? else {
            return Ok(());
        };
        let sku = raw_sku.trim().to_string();
        if !self.inventory.contains(sku.as_str()) {
            return self.say("Product not found");
        }

        let Some(raw_quantity) = self.ask("Enter new quantity: ")? else {
            return Ok(());
        };
        let quantity = match prompt::parse_quantity(&raw_quantity) {
            Ok(quantity) => quantity,
            Err(err) => return self.reject(&err),
        };

        match self.inventory.update_quantity(sku.as_str(), quantity) {
            Ok(()) => self.say("Quantity updated successfully!"),
            Err(InventoryError::NotFound(_)) => self.say("Product not found"),
            Err(err) => self.reject(&err),
        }
    }

    fn view_products(&mut self) -> anyhow::Result<()> {
        let Some(raw_key) = self.ask("Sort by (sku/price/value/name): ")? else {
            return Ok(());
        };
        let products = self.inventory.list_sorted(SortKey::parse(&raw_key));
        let table = render::product_table(&raw_key, &products, &self.settings.currency_symbol);
        write!(self.output, "{table}")?;
        Ok(())
    }

    fn low_stock(&mut self) -> anyhow::Result<()> {
        let text = render::low_stock_list(&self.inventory.low_stock_alerts());
        write!(self.output, "{text}")?;
        Ok(())
    }

    fn history(&mut self) -> anyhow::Result<()> {
        let Some(raw_count) = self.ask("Enter number of transactions to view: ")? else {
            return Ok(());
        };
        let count = match prompt::parse_count(&raw_count, self.settings.history_default) {
            Ok(count) => count,
            Err(err) => return self.reject(&err),
        };
        let text = render::history(count, &self.inventory.recent_transactions(count));
        write!(self.output, "{text}")?;
        Ok(())
    }

    fn statistics(&mut self) -> anyhow::Result<()> {
        let text = render::statistics(&self.inventory.statistics(), &self.settings.currency_symbol);
        write!(self.output, "{text}")?;
        Ok(())
    }

    fn undo(&mut self) -> anyhow::Result<()> {
        match self.inventory.undo_last() {
            Ok(_) => self.say("Last update undone!"),
            Err(InventoryError::NothingToUndo) => self.say("Nothing to undo"),
            Err(err) => self.reject(&err),
        }
    }
}
