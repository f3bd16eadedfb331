//! Database configuration module

use serde::{Deserialize, Serialize};

/// Where forwarding rules are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// SQLite database file (or `sqlite::memory:`)
    Sqlite,
    /// Process memory, lost on restart
    Memory,
}

/// Rule store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Storage backend for forwarding rules
    #[serde(default = "default_storage")]
    pub storage: StorageBackend,

    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Create the database file when it does not exist
    #[serde(default = "default_create_if_missing")]
    pub create_if_missing: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            url: String::from("sqlite://sms_forwarder.db"),
            max_connections: 5,
            connect_timeout: 30,
            create_if_missing: default_create_if_missing(),
        }
    }
}

impl DatabaseConfig {
    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Configuration for a private in-memory SQLite database
    pub fn in_memory() -> Self {
        Self {
            url: String::from("sqlite::memory:"),
            max_connections: 1,
            ..Default::default()
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Whether the URL points at an in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

fn default_storage() -> StorageBackend {
    StorageBackend::Sqlite
}

fn default_create_if_missing() -> bool {
    true
}
