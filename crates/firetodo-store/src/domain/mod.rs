//! Domain Layer
//!
//! Contains the item entity and core abstractions.
//! This layer has no transport dependencies (only serde, chrono and thiserror).

mod entity;
mod item;

pub use entity::{Entity, StoreError, StoreResult};
pub use item::{Item, ItemId, ItemInput};
