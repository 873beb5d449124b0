//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for the remote item collection.
//! Implementations can use Firestore, in-memory, etc.

use async_trait::async_trait;

use crate::domain::{Item, ItemId, ItemInput, StoreResult};

/// The four operations the UI performs against the item collection
///
/// Each call is a single round trip with no retry or batching.
/// Futures are `?Send` in the browser, where requests run on the event loop.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ItemStore: Send + Sync {
    /// All items in backend-defined order
    async fn list(&self) -> StoreResult<Vec<Item>>;

    /// Store a new record, returning the identifier the backend assigned
    async fn insert(&self, input: &ItemInput) -> StoreResult<ItemId>;

    /// Patch only the `completed` field of an existing record
    async fn set_completed(&self, id: &ItemId, completed: bool) -> StoreResult<()>;

    /// Delete a record
    async fn remove(&self, id: &ItemId) -> StoreResult<()>;
}
