//! List Context
//!
//! State and backend handle shared by the list view's children via the
//! Leptos Context API. Every action updates the store only after the
//! backend confirms it.

use std::sync::Arc;

use leptos::task::spawn_local;

use firetodo_store::{actions, ItemId, ItemStore};

use crate::store::{store_apply, store_set_loading, store_snapshot, TodoStore};

#[derive(Clone)]
pub struct TodoContext {
    state: TodoStore,
    client: Arc<dyn ItemStore>,
}

impl TodoContext {
    pub fn new(state: TodoStore, client: Arc<dyn ItemStore>) -> Self {
        Self { state, client }
    }

    /// Replace the list with a fresh fetch
    pub fn load(&self) {
        let state = self.state;
        let client = self.client.clone();
        store_set_loading(&state, true);
        spawn_local(async move {
            if let Some(change) = actions::load(client.as_ref()).await {
                store_apply(&state, change);
            }
            store_set_loading(&state, false);
        });
    }

    /// Log whether the backend is reachable
    pub fn probe(&self) {
        let client = self.client.clone();
        spawn_local(async move {
            actions::probe(client.as_ref()).await;
        });
    }

    /// Create an item; `on_added` runs once the backend has stored it
    pub fn add(&self, text: String, on_added: impl FnOnce() + 'static) {
        let state = self.state;
        let client = self.client.clone();
        spawn_local(async move {
            if let Some(change) = actions::submit(client.as_ref(), &text).await {
                store_apply(&state, change);
                on_added();
            }
        });
    }

    pub fn toggle(&self, id: ItemId) {
        let state = self.state;
        let client = self.client.clone();
        let items = store_snapshot(&state);
        spawn_local(async move {
            if let Some(change) = actions::toggle(client.as_ref(), &items, &id).await {
                store_apply(&state, change);
            }
        });
    }

    pub fn remove(&self, id: ItemId) {
        let state = self.state;
        let client = self.client.clone();
        spawn_local(async move {
            if let Some(change) = actions::remove(client.as_ref(), &id).await {
                store_apply(&state, change);
            }
        });
    }
}
