//! User Actions
//!
//! Each action performs one remote call and, only when the backend
//! acknowledges it, returns the change to apply to the local mirror.
//! Failures are logged and swallowed: the caller's state simply does not advance.

use log::{debug, error, info, warn};

use crate::domain::{Item, ItemId, ItemInput};
use crate::mirror::{completed_of, ItemChange};
use crate::repository::ItemStore;

/// Fetch the whole collection
pub async fn load<S: ItemStore + ?Sized>(store: &S) -> Option<ItemChange> {
    match store.list().await {
        Ok(items) => {
            debug!("Loaded {} items", items.len());
            Some(ItemChange::Replaced(items))
        }
        Err(e) => {
            error!("Error fetching items: {}", e);
            None
        }
    }
}

/// Create an item from the entry form
///
/// Whitespace-only text never reaches the backend.
pub async fn submit<S: ItemStore + ?Sized>(store: &S, text: &str) -> Option<ItemChange> {
    if text.trim().is_empty() {
        return None;
    }

    let input = ItemInput::new(text);
    match store.insert(&input).await {
        Ok(id) => {
            info!("Item added with id {}", id);
            Some(ItemChange::Added(input.into_item(id)))
        }
        Err(e) => {
            error!("Error adding item: {}", e);
            None
        }
    }
}

/// Flip the completion flag of a mirrored item
pub async fn toggle<S: ItemStore + ?Sized>(
    store: &S,
    items: &[Item],
    id: &ItemId,
) -> Option<ItemChange> {
    let completed = !completed_of(items, id)?;
    match store.set_completed(id, completed).await {
        Ok(()) => Some(ItemChange::CompletedSet {
            id: id.clone(),
            completed,
        }),
        Err(e) => {
            error!("Error toggling item {}: {}", id, e);
            None
        }
    }
}

/// Delete an item
pub async fn remove<S: ItemStore + ?Sized>(store: &S, id: &ItemId) -> Option<ItemChange> {
    match store.remove(id).await {
        Ok(()) => Some(ItemChange::Removed(id.clone())),
        Err(e) => {
            error!("Error deleting item {}: {}", id, e);
            None
        }
    }
}

/// Start-up connection check: reports how many documents the collection holds
pub async fn probe<S: ItemStore + ?Sized>(store: &S) -> Option<usize> {
    match store.list().await {
        Ok(items) => {
            info!("Backend connection ok: {} documents found", items.len());
            Some(items.len())
        }
        // Unreachable or unauthorized; other failures mean the backend answered
        Err(e) if e.is_connection() => {
            error!("Backend connection failed: {}", e);
            None
        }
        Err(e) => {
            warn!("Backend reachable but listing failed: {}", e);
            None
        }
    }
}
