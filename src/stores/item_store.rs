use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::errors::internal::{InternalError, StoreError};
use crate::types::internal::item::{ItemInput, ShoppingItem};

/// Concurrent in-memory repository of shopping items
///
/// Every operation is safe to call from many tasks at once without external
/// locking. Atomicity is per key: there are no multi-item transactions and
/// `list` is not a snapshot, so writers running alongside it may be
/// partially reflected.
///
/// Updates are optimistic: the current record is read, a replacement is
/// built, and the replacement is only written if the stored record is still
/// the one that was read. A lost race restarts the whole cycle.
pub struct ItemStore {
    items: DashMap<Uuid, ShoppingItem>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    /// All items, in no particular order
    pub fn list(&self) -> Vec<ShoppingItem> {
        self.items
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn get(&self, id: &Uuid) -> Option<ShoppingItem> {
        self.items.get(id).map(|entry| entry.value().clone())
    }

    /// Store a new item with a generated id and the current time
    ///
    /// # Errors
    /// Returns `StoreError::IdCollision` if the generated id is already taken.
    pub fn create(&self, input: ItemInput) -> Result<ShoppingItem, InternalError> {
        let item = ShoppingItem::new(Uuid::new_v4(), input, Utc::now());

        match self.items.entry(item.id) {
            Entry::Occupied(_) => {
                tracing::error!(item_id = %item.id, "Generated item id already exists");
                Err(StoreError::IdCollision(item.id).into())
            }
            Entry::Vacant(slot) => {
                slot.insert(item.clone());
                tracing::debug!(item_id = %item.id, "Item created");
                Ok(item)
            }
        }
    }

    /// Replace the mutable fields of an item, keeping `id` and `created_at`
    ///
    /// An omitted status keeps the stored one. Returns `None` if the item
    /// does not exist (or is deleted while the update is retrying).
    pub fn update(&self, id: &Uuid, input: &ItemInput) -> Option<ShoppingItem> {
        self.swap_with(id, |current| current.replaced_with(input))
    }

    /// Set the status of an item to `Purchased`, leaving every other field alone
    pub fn mark_purchased(&self, id: &Uuid) -> Option<ShoppingItem> {
        self.swap_with(id, ShoppingItem::purchased)
    }

    /// Remove an item, returning whether it existed
    pub fn delete(&self, id: &Uuid) -> bool {
        let removed = self.items.remove(id).is_some();
        if removed {
            tracing::debug!(item_id = %id, "Item deleted");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-modify-write loop around `compare_and_swap`
    ///
    /// Retries without bound until the swap lands or the item disappears.
    fn swap_with<F>(&self, id: &Uuid, build: F) -> Option<ShoppingItem>
    where
        F: Fn(&ShoppingItem) -> ShoppingItem,
    {
        loop {
            let current = self.get(id)?;
            let replacement = build(&current);

            if self.compare_and_swap(id, &current, replacement.clone()) {
                tracing::debug!(item_id = %id, "Item updated");
                return Some(replacement);
            }

            tracing::debug!(item_id = %id, "Concurrent write detected, retrying update");
        }
    }

    /// Write `replacement` only if the stored record still equals `expected`
    ///
    /// The comparison and the write happen under the key's shard lock.
    fn compare_and_swap(&self, id: &Uuid, expected: &ShoppingItem, replacement: ShoppingItem) -> bool {
        match self.items.get_mut(id) {
            Some(mut current) if *current == *expected => {
                *current = replacement;
                true
            }
            _ => false,
        }
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
