//! In-memory inventory store.
//!
//! This crate owns the products, the transaction log and the undo stack, plus
//! the read-only views computed over them. It performs no IO; the menu loop
//! in `stockroom-cli` calls into [`Inventory`] one operation at a time.

pub mod journal;
pub mod ordering;
pub mod product;
pub mod reports;
pub mod shared;
pub mod store;
pub mod undo;

pub use journal::{InventoryEvent, ProductAdded, QuantityUpdated, TransactionLog, TransactionRecord};
pub use ordering::SortKey;
pub use product::{LOW_STOCK_THRESHOLD, Product};
pub use reports::{CategoryBreakdown, InventoryStats};
pub use shared::SharedInventory;
pub use store::{AddOutcome, Inventory};
pub use undo::{UndoAction, UndoStack};

pub use stockroom_core::{InventoryError, InventoryResult, Sku};
