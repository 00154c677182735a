//! In-memory item store.
//!
//! Items are untyped JSON values addressed by their position in insertion
//! order. Removing an item shifts every later item down by one, so an index
//! handed out earlier may name a different item afterwards. Each call holds the
//! lock only for its own duration; nothing coordinates separate requests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;
use serde_json::Value;

#[derive(Debug, Default)]
pub struct ItemStore {
    items: Mutex<Vec<Value>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Value>> {
        // a panic while holding the lock cannot leave the Vec half-updated
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every item in insertion order.
    pub fn list(&self) -> Vec<Value> {
        self.lock().clone()
    }

    /// Appends an item and returns its index.
    pub fn push(&self, item: Value) -> usize {
        let mut items = self.lock();
        items.push(item);
        let index = items.len() - 1;
        debug!("Stored item at index {}", index);
        index
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.lock().get(index).cloned()
    }

    /// Overwrites the item at `index`, returning the previous value.
    pub fn replace(&self, index: usize, item: Value) -> Option<Value> {
        let mut items = self.lock();
        let slot = items.get_mut(index)?;
        debug!("Replaced item at index {}", index);
        Some(std::mem::replace(slot, item))
    }

    /// Removes the item at `index`, shifting later items down.
    pub fn remove(&self, index: usize) -> Option<Value> {
        let mut items = self.lock();
        if index >= items.len() {
            return None;
        }
        debug!("Removed item at index {}", index);
        Some(items.remove(index))
    }
}
