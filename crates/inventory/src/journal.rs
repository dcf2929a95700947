//! Transaction log: an append-only, newest-first audit trail of mutations.
//!
//! Undo never removes entries; the log only grows.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::Sku;

/// Event: ProductAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAdded {
    pub sku: Sku,
    pub name: String,
    pub quantity: u32,
}

/// Event: QuantityUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityUpdated {
    pub sku: Sku,
    pub old_quantity: u32,
    pub new_quantity: u32,
}

/// A committed mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type")]
pub enum InventoryEvent {
    #[serde(rename = "inventory.product.added")]
    ProductAdded(ProductAdded),
    #[serde(rename = "inventory.product.quantity_updated")]
    QuantityUpdated(QuantityUpdated),
}

impl InventoryEvent {
    /// Stable event name (e.g. "inventory.product.added").
    pub fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ProductAdded(_) => "inventory.product.added",
            InventoryEvent::QuantityUpdated(_) => "inventory.product.quantity_updated",
        }
    }

    pub fn sku(&self) -> &Sku {
        match self {
            InventoryEvent::ProductAdded(e) => &e.sku,
            InventoryEvent::QuantityUpdated(e) => &e.sku,
        }
    }

    /// Human-readable description shown in the history view.
    pub fn describe(&self) -> String {
        match self {
            InventoryEvent::ProductAdded(e) => {
                format!("ADD: {} - {} (Qty: {})", e.sku, e.name, e.quantity)
            }
            InventoryEvent::QuantityUpdated(e) => format!(
                "UPDATE: {} - Quantity changed from {} to {}",
                e.sku, e.old_quantity, e.new_quantity
            ),
        }
    }
}

/// One line of the transaction log. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub event: InventoryEvent,
}

impl TransactionRecord {
    pub fn new(event: InventoryEvent, timestamp: DateTime<Utc>) -> Self {
        Self {
            message: event.describe(),
            timestamp,
            event,
        }
    }
}

impl core::fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} at {}",
            self.message,
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

/// Newest-first sequence of [`TransactionRecord`]s.
#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    entries: VecDeque<TransactionRecord>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a record for `event`.
    pub fn record(&mut self, event: InventoryEvent, at: DateTime<Utc>) -> &TransactionRecord {
        self.entries.push_front(TransactionRecord::new(event, at));
        &self.entries[0]
    }

    /// Up to `n` most recent records, newest first. Asking for more than the
    /// log holds returns the whole log.
    pub fn recent(&self, n: usize) -> Vec<TransactionRecord> {
        self.entries.iter().take(n).cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
