//! Single-step undo.
//!
//! Each successful mutation pushes exactly one [`UndoAction`]; `undo_last`
//! pops and applies it. Applied actions are discarded (no redo).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryError, InventoryResult, Sku};

use crate::product::Product;

/// Reversal of one committed mutation, with the prior state captured by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UndoAction {
    /// Reverses an add.
    RemoveSku(Sku),
    /// Reverses a quantity update.
    RestoreQuantity { sku: Sku, quantity: u32 },
}

impl UndoAction {
    pub fn sku(&self) -> &Sku {
        match self {
            UndoAction::RemoveSku(sku) => sku,
            UndoAction::RestoreQuantity { sku, .. } => sku,
        }
    }

    /// Apply the reversal to the product map.
    pub fn apply(&self, products: &mut BTreeMap<Sku, Product>) -> InventoryResult<()> {
        match self {
            UndoAction::RemoveSku(sku) => products
                .remove(sku)
                .map(|_| ())
                .ok_or_else(|| InventoryError::not_found(sku)),
            UndoAction::RestoreQuantity { sku, quantity } => {
                let product = products
                    .get_mut(sku)
                    .ok_or_else(|| InventoryError::not_found(sku))?;
                product.set_quantity(*quantity);
                Ok(())
            }
        }
    }
}

/// LIFO stack of pending [`UndoAction`]s.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    actions: Vec<UndoAction>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: UndoAction) {
        self.actions.push(action);
    }

    pub fn pop(&mut self) -> Option<UndoAction> {
        self.actions.pop()
    }

    pub fn peek(&self) -> Option<&UndoAction> {
        self.actions.last()
    }

    pub fn depth(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
