//! Control-plane setting store configuration

use serde::{Deserialize, Serialize};

/// Key under which the monitoring flag is persisted
pub const MONITORING_ENABLED_KEY: &str = "monitoring_enabled";

/// Where key-value settings are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsBackend {
    /// Same SQLite database as the rules (`settings` table)
    Database,
    /// Redis server, shared between daemon instances
    Redis,
    /// Process memory, lost on restart
    Memory,
}

/// Setting store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SettingsConfig {
    /// Storage backend for settings
    pub backend: SettingsBackend,

    /// Redis connection URL (used when `backend = "redis"`)
    #[serde(default)]
    pub redis_url: String,

    /// Key prefix applied to Redis keys
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Setting key of the monitoring flag
    #[serde(default = "default_monitoring_key")]
    pub monitoring_key: String,

    /// Value of the monitoring flag when it was never written
    #[serde(default)]
    pub monitoring_default: bool,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            backend: SettingsBackend::Database,
            redis_url: String::from("redis://127.0.0.1:6379"),
            key_prefix: default_key_prefix(),
            monitoring_key: default_monitoring_key(),
            monitoring_default: false,
        }
    }
}

fn default_key_prefix() -> String {
    String::from("sms_forwarder:")
}

fn default_monitoring_key() -> String {
    MONITORING_ENABLED_KEY.to_string()
}
