//! The inventory store: owns the product map, the transaction log and the
//! undo stack, and keeps the three in step on every mutation.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, info, warn};

use stockroom_core::{InventoryError, InventoryResult, Sku};

use crate::journal::{InventoryEvent, ProductAdded, QuantityUpdated, TransactionLog};
use crate::product::{LOW_STOCK_THRESHOLD, Product};
use crate::undo::{UndoAction, UndoStack};

/// What a successful add reports back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    /// The new product starts below [`LOW_STOCK_THRESHOLD`].
    pub low_stock: bool,
}

/// Owning context for one inventory session.
///
/// Mutations are all-or-nothing: a rejected call leaves the map, the log and
/// the undo stack exactly as they were.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: BTreeMap<Sku, Product>,
    journal: TransactionLog,
    undo: UndoStack,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a new product.
    ///
    /// Fails with [`InventoryError::DuplicateSku`] if the SKU (compared
    /// case-insensitively) is already present.
    pub fn add_product(&mut self, product: Product) -> InventoryResult<AddOutcome> {
        if self.products.contains_key(product.sku()) {
            debug!(sku = %product.sku(), "add rejected: duplicate sku");
            return Err(InventoryError::duplicate(product.sku()));
        }

        let sku = product.sku().clone();
        let quantity = product.quantity();
        let low_stock = product.is_low_stock();
        let event = InventoryEvent::ProductAdded(ProductAdded {
            sku: sku.clone(),
            name: product.name().to_string(),
            quantity,
        });

        self.products.insert(sku.clone(), product);
        self.journal.record(event, Utc::now());
        self.undo.push(UndoAction::RemoveSku(sku.clone()));

        info!(sku = %sku, quantity, event_type = "inventory.product.added", "product added");
        if low_stock {
            warn!(sku = %sku, quantity, threshold = LOW_STOCK_THRESHOLD, "low stock alert");
        }

        Ok(AddOutcome { low_stock })
    }

    /// Overwrite the quantity of an existing product.
    pub fn update_quantity(&mut self, sku: impl Into<Sku>, new_quantity: u32) -> InventoryResult<()> {
        let sku = sku.into();
        let Some(product) = self.products.get_mut(&sku) else {
            debug!(sku = %sku, "update rejected: not found");
            return Err(InventoryError::not_found(sku));
        };

        let old_quantity = product.quantity();
        product.set_quantity(new_quantity);
        let stored = product.sku().clone();

        self.journal.record(
            InventoryEvent::QuantityUpdated(QuantityUpdated {
                sku: stored.clone(),
                old_quantity,
                new_quantity,
            }),
            Utc::now(),
        );
        self.undo.push(UndoAction::RestoreQuantity {
            sku: stored.clone(),
            quantity: old_quantity,
        });

        info!(
            sku = %stored,
            old_quantity,
            new_quantity,
            event_type = "inventory.product.quantity_updated",
            "quantity updated"
        );
        Ok(())
    }

    /// Reverse the most recent mutation.
    ///
    /// Undo is not itself logged or undoable. Returns the action that was
    /// applied.
    pub fn undo_last(&mut self) -> InventoryResult<UndoAction> {
        let action = self.undo.pop().ok_or(InventoryError::NothingToUndo)?;
        if let Err(err) = action.apply(&mut self.products) {
            self.undo.push(action);
            return Err(err);
        }

        info!(sku = %action.sku(), action = ?action, "undo applied");
        Ok(action)
    }

    pub fn get(&self, sku: impl Into<Sku>) -> Option<&Product> {
        self.products.get(&sku.into())
    }

    pub fn contains(&self, sku: impl Into<Sku>) -> bool {
        self.products.contains_key(&sku.into())
    }

    /// Products in the store's iteration order (case-insensitive SKU).
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn journal(&self) -> &TransactionLog {
        &self.journal
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.depth()
    }
}
