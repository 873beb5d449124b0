//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! All entities must have a unique ID and be thread-safe.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reported by an item store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Not authorized: {0}")]
    Auth(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Backend returned {status}: {message}")]
    Backend { status: u16, message: String },
    #[error("Malformed response: {0}")]
    Decode(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl StoreError {
    /// Whether the failure happened before the backend could answer
    pub fn is_connection(&self) -> bool {
        matches!(self, StoreError::Network(_) | StoreError::Auth(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failures() {
        assert!(StoreError::Network("refused".to_string()).is_connection());
        assert!(StoreError::Auth("denied".to_string()).is_connection());
        assert!(!StoreError::Decode("bad json".to_string()).is_connection());
        assert!(!StoreError::Backend {
            status: 503,
            message: "Service Unavailable".to_string()
        }
        .is_connection());
    }
}
