//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! One store per mounted list view.

use leptos::prelude::*;
use reactive_stores::Store;

use firetodo_store::{apply_change, Item, ItemChange};

/// Last confirmed backend state plus the initial-fetch flag
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Items in backend order
    pub items: Vec<Item>,
    /// True while the initial listing is in flight
    pub loading: bool,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Items, tracked
pub fn store_items(store: &TodoStore) -> Vec<Item> {
    store.items().get()
}

/// Items as of now, without subscribing
pub fn store_snapshot(store: &TodoStore) -> Vec<Item> {
    store.items().get_untracked()
}

pub fn store_loading(store: &TodoStore) -> bool {
    store.loading().get()
}

pub fn store_set_loading(store: &TodoStore, loading: bool) {
    *store.loading().write() = loading;
}

/// Patch the mirrored items with a change the backend confirmed
pub fn store_apply(store: &TodoStore, change: ItemChange) {
    let items_field = store.items();
    let mut items = items_field.write();
    apply_change(&mut items, change);
}
