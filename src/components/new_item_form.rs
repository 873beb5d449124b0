//! New Item Form Component
//!
//! Text entry for creating items.

use leptos::prelude::*;

use crate::context::TodoContext;

/// Form for creating new items
///
/// The input is cleared only after the backend has stored the item.
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");

    let (new_text, set_new_text) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() {
            return;
        }
        ctx.add(text, move || set_new_text.set(String::new()));
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <input
                type="text"
                placeholder="New task..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
