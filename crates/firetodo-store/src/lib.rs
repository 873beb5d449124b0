//! Firetodo Store
//!
//! Layered structure:
//! - domain: the item entity and error taxonomy
//! - repository: the item store interface with Firestore and in-memory backends
//! - mirror: how confirmed changes patch the view's local copy
//! - actions: remote call, then confirmed change
//! - config: backend connection settings

pub mod actions;
pub mod config;
pub mod domain;
pub mod mirror;
pub mod repository;

pub use config::{ConfigError, StoreConfig};
pub use domain::{Entity, Item, ItemId, ItemInput, StoreError, StoreResult};
pub use mirror::{apply_change, ItemChange};
pub use repository::{FirestoreStore, ItemStore, MemoryStore};
