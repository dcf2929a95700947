//! Inventory error model.

use thiserror::Error;

use crate::sku::Sku;

/// Result type used across the inventory domain.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Every variant is recoverable: the operation that produced it left the store,
/// the transaction log and the undo stack untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// An add was rejected because the SKU is already tracked.
    #[error("SKU already exists: {0}")]
    DuplicateSku(Sku),

    /// The SKU is not tracked by the store.
    #[error("product not found: {0}")]
    NotFound(Sku),

    /// The undo stack is empty.
    #[error("nothing to undo")]
    NothingToUndo,

    /// Operator input failed validation before reaching the store.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl InventoryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate(sku: impl Into<Sku>) -> Self {
        Self::DuplicateSku(sku.into())
    }

    pub fn not_found(sku: impl Into<Sku>) -> Self {
        Self::NotFound(sku.into())
    }
}
