//! Bounded, deduplicated cart.

use lootdrop_types::{Item, ItemName};
use tracing::debug;

/// Ordered cart of catalog items.
///
/// Invariants, held by every operation:
/// - no two entries share a name
/// - `len() <= capacity()`
///
/// Violating a precondition is never an error. A duplicate or over-capacity `add` and a
/// `remove` of an absent name leave the cart untouched and report `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    entries: Vec<Item>,
    capacity: usize,
}

/// Frozen view of the cart handed to a provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    pub joined_names: String,
    pub count: usize,
}

impl Cart {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Append `item` unless it is already present or the cart is full.
    pub fn add(&mut self, item: &Item) -> bool {
        if self.is_full() || self.contains(&item.name) {
            return false;
        }
        self.entries.push(item.clone());
        debug!(item = %item.name, len = self.entries.len(), "Cart add");
        true
    }

    /// Remove the entry named `name`, keeping the order of the rest.
    pub fn remove(&mut self, name: &ItemName) -> bool {
        let Some(index) = self.entries.iter().position(|entry| &entry.name == name) else {
            return false;
        };
        self.entries.remove(index);
        debug!(item = %name, len = self.entries.len(), "Cart remove");
        true
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            debug!(cleared = self.entries.len(), "Cart clear");
        }
        self.entries.clear();
    }

    #[must_use]
    pub fn contains(&self, name: &ItemName) -> bool {
        self.entries.iter().any(|entry| &entry.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.entries
    }

    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        let joined_names = self
            .entries
            .iter()
            .map(|entry| entry.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        CartSnapshot {
            joined_names,
            count: self.entries.len(),
        }
    }
}
