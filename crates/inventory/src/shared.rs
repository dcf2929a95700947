//! Thread-safe handle for exposing one [`Inventory`] to several callers.
//!
//! Mutations take the write lock, so they commit one at a time and the top of
//! the undo stack always belongs to the latest committed mutation. Reports
//! take the read lock and see the map and the log from the same instant.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockroom_core::{InventoryResult, Sku};

use crate::journal::TransactionRecord;
use crate::ordering::SortKey;
use crate::product::Product;
use crate::reports::InventoryStats;
use crate::store::{AddOutcome, Inventory};
use crate::undo::UndoAction;

#[derive(Debug, Clone, Default)]
pub struct SharedInventory {
    inner: Arc<RwLock<Inventory>>,
}

impl SharedInventory {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(inventory)),
        }
    }

    // Mutations validate before touching state, so a poisoned guard still
    // holds a consistent store.
    fn read(&self) -> RwLockReadGuard<'_, Inventory> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inventory> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_product(&self, product: Product) -> InventoryResult<AddOutcome> {
        self.write().add_product(product)
    }

    pub fn update_quantity(&self, sku: impl Into<Sku>, new_quantity: u32) -> InventoryResult<()> {
        self.write().update_quantity(sku, new_quantity)
    }

    pub fn undo_last(&self) -> InventoryResult<UndoAction> {
        self.write().undo_last()
    }

    pub fn list_sorted(&self, key: SortKey) -> Vec<Product> {
        self.read().list_sorted(key)
    }

    pub fn low_stock_alerts(&self) -> Vec<Product> {
        self.read().low_stock_alerts()
    }

    pub fn statistics(&self) -> InventoryStats {
        self.read().statistics()
    }

    pub fn recent_transactions(&self, n: usize) -> Vec<TransactionRecord> {
        self.read().recent_transactions(n)
    }

    /// Run several reads against one consistent view.
    pub fn with_snapshot<R>(&self, f: impl FnOnce(&Inventory) -> R) -> R {
        f(&self.read())
    }
}
