//! Store Configuration
//!
//! Connection settings for the backend collection.

use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_DATABASE: &str = "(default)";
pub const DEFAULT_COLLECTION: &str = "todos";

pub const ENV_PROJECT_ID: &str = "FIRETODO_PROJECT_ID";
pub const ENV_API_KEY: &str = "FIRETODO_API_KEY";
pub const ENV_DATABASE: &str = "FIRETODO_DATABASE";
pub const ENV_COLLECTION: &str = "FIRETODO_COLLECTION";
pub const ENV_ENDPOINT: &str = "FIRETODO_ENDPOINT";
pub const ENV_LOG_LEVEL: &str = "FIRETODO_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required setting `{0}`")]
    Missing(&'static str),
    #[error("setting `{0}` must not be empty")]
    Empty(&'static str),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    pub project_id: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl StoreConfig {
    /// Settings for a project with every other value defaulted
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            api_key: None,
            database: default_database(),
            collection: default_collection(),
            endpoint: default_endpoint(),
            log_level: default_log_level(),
        }
    }

    /// Read settings from `FIRETODO_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build settings from a `FIRETODO_*` variable lookup
    ///
    /// Unset variables keep their defaults; an empty API key counts as unset.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let project_id = var(ENV_PROJECT_ID).ok_or(ConfigError::Missing(ENV_PROJECT_ID))?;
        let mut config = Self::new(project_id);
        config.api_key = var(ENV_API_KEY).filter(|key| !key.is_empty());
        if let Some(database) = var(ENV_DATABASE) {
            config.database = database;
        }
        if let Some(collection) = var(ENV_COLLECTION) {
            config.collection = collection;
        }
        if let Some(endpoint) = var(ENV_ENDPOINT) {
            config.endpoint = endpoint;
        }
        if let Some(level) = var(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        config.validate()?;
        Ok(config)
    }

    /// First candidate that passes validation, in order of preference
    pub fn first_valid(candidates: impl IntoIterator<Item = Option<Self>>) -> Option<Self> {
        candidates.into_iter().flatten().find(|config| match config.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!("Ignoring backend configuration: {}", e);
                false
            }
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project_id.trim().is_empty() {
            return Err(ConfigError::Empty("projectId"));
        }
        if self.collection.trim().is_empty() {
            return Err(ConfigError::Empty("collection"));
        }
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Empty("endpoint"));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// `.../documents/{collection}` URL for the configured project
    pub fn collection_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents/{}",
            self.endpoint.trim_end_matches('/'),
            self.project_id,
            self.database,
            self.collection
        )
    }
}
