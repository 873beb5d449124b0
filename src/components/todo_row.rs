//! Todo Row Component
//!
//! A single item with its toggle and delete controls.

use leptos::prelude::*;

use firetodo_store::Item;

use crate::context::TodoContext;

#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");

    let Item { id, text, completed, .. } = item;
    let toggle_ctx = ctx.clone();
    let toggle_id = id.clone();

    view! {
        <li class={if completed { "todo-row completed" } else { "todo-row" }}>
            <button
                class="toggle-btn"
                title={if completed { "Mark as pending" } else { "Mark as done" }}
                on:click=move |_| toggle_ctx.toggle(toggle_id.clone())
            >
                {if completed { "●" } else { "○" }}
            </button>

            <span class="todo-text">{text}</span>

            <button class="delete-btn" title="Delete" on:click=move |_| ctx.remove(id.clone())>
                "×"
            </button>
        </li>
    }
}
