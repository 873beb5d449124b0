//! Firetodo Frontend App
//!
//! Resolves the backend and mounts the list view.

use std::sync::Arc;

use leptos::prelude::*;
use log::{error, info, warn};

use firetodo_store::{FirestoreStore, ItemStore, MemoryStore};

use crate::components::TodoList;
use crate::{config, logger};

/// Firestore when configured, otherwise an in-memory collection
fn connect() -> Arc<dyn ItemStore> {
    let Some(config) = config::load() else {
        warn!("No backend configured; items are kept in memory only");
        return Arc::new(MemoryStore::new());
    };

    if let Ok(level) = config.level_filter() {
        logger::set_level(level);
    }
    match FirestoreStore::new(&config) {
        Ok(store) => {
            info!("Using collection {}", store.collection_url());
            Arc::new(store)
        }
        Err(e) => {
            error!("Backend setup failed, falling back to memory: {}", e);
            Arc::new(MemoryStore::new())
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let client = connect();

    view! {
        <main class="todo-app">
            <h1>"Tasks"</h1>
            <TodoList client=client />
        </main>
    }
}
