//! UI Components
//!
//! Leptos components for the list view.

mod todo_list;
mod todo_row;
mod new_item_form;

pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use new_item_form::NewItemForm;
