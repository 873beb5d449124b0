//! In-Memory Item Store
//!
//! Process-local collection with backend-style identifier assignment.
//! Used when no backend is configured and in tests.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use super::traits::ItemStore;
use crate::domain::{Entity, Item, ItemId, ItemInput, StoreError, StoreResult};

/// Insertion-ordered item collection held in memory
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<Vec<Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with existing records
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    fn items(&self) -> StoreResult<MutexGuard<'_, Vec<Item>>> {
        self.items
            .lock()
            .map_err(|_| StoreError::Backend {
                status: 500,
                message: "memory store lock poisoned".to_string(),
            })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ItemStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Item>> {
        Ok(self.items()?.clone())
    }

    async fn insert(&self, input: &ItemInput) -> StoreResult<ItemId> {
        let id = ItemId::new(Uuid::new_v4().simple().to_string());
        self.items()?.push(input.clone().into_item(id.clone()));
        Ok(id)
    }

    async fn set_completed(&self, id: &ItemId, completed: bool) -> StoreResult<()> {
        let mut items = self.items()?;
        let item = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| StoreError::NotFound(format!("item {}", id)))?;
        item.completed = completed;
        Ok(())
    }

    // Deleting a missing record succeeds, as it does against Firestore
    async fn remove(&self, id: &ItemId) -> StoreResult<()> {
        self.items()?.retain(|item| item.id() != id);
        Ok(())
    }
}
