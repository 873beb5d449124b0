//! Local Mirror
//!
//! Confirmed changes and how they patch the view's copy of the collection.

use crate::domain::{Entity, Item, ItemId};

/// A change the backend has acknowledged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemChange {
    /// Full listing replaces whatever was shown
    Replaced(Vec<Item>),
    Added(Item),
    CompletedSet { id: ItemId, completed: bool },
    Removed(ItemId),
}

/// Patch the mirrored sequence with a confirmed change
///
/// Changes naming an identifier that is no longer shown are no-ops.
pub fn apply_change(items: &mut Vec<Item>, change: ItemChange) {
    match change {
        ItemChange::Replaced(loaded) => *items = loaded,
        ItemChange::Added(item) => items.push(item),
        ItemChange::CompletedSet { id, completed } => {
            if let Some(item) = items.iter_mut().find(|item| item.id() == &id) {
                item.completed = completed;
            }
        }
        ItemChange::Removed(id) => items.retain(|item| item.id() != &id),
    }
}

/// Current completion flag of a mirrored item
pub fn completed_of(items: &[Item], id: &ItemId) -> Option<bool> {
    items.iter().find(|item| item.id() == id).map(|item| item.completed)
}
