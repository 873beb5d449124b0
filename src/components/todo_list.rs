//! Todo List Component
//!
//! Owns the view state for one mounted list and renders the entry form
//! and the rows.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use firetodo_store::ItemStore;

use crate::components::{NewItemForm, TodoRow};
use crate::context::TodoContext;
use crate::store::{store_items, store_loading, TodoState};

#[component]
pub fn TodoList(client: Arc<dyn ItemStore>) -> impl IntoView {
    let state = Store::new(TodoState {
        loading: true,
        ..Default::default()
    });
    let ctx = TodoContext::new(state, client);
    provide_context(ctx.clone());

    // Fetch once on mount
    Effect::new(move |_| {
        ctx.load();
        ctx.probe();
    });

    view! {
        <section class="todo-list">
            <NewItemForm />

            <Show
                when=move || !store_loading(&state)
                fallback=|| view! { <div class="loading">"Loading tasks..."</div> }
            >
                <ul class="todo-items">
                    <For
                        each=move || store_items(&state)
                        // Completion is part of the key so a confirmed toggle re-renders the row
                        key=|item| (item.id.clone(), item.completed)
                        children=move |item| view! { <TodoRow item=item /> }
                    />
                </ul>
            </Show>
        </section>
    }
}
