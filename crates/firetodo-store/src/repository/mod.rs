//! Repository Layer
//!
//! Item store abstraction and its implementations.

mod traits;
mod document;
mod firestore;
mod memory;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;

pub use traits::ItemStore;
pub use firestore::FirestoreStore;
pub use memory::MemoryStore;
