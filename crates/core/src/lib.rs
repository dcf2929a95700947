//! `stockroom-core` — domain building blocks shared by the inventory crates.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod sku;

pub use error::{InventoryError, InventoryResult};
pub use sku::Sku;
