//! Monitoring switch backed by a setting store

use sf_shared::config::SettingsConfig;
use sf_shared::config::settings::MONITORING_ENABLED_KEY;
use std::sync::Arc;

use crate::errors::DomainResult;
use crate::repositories::SettingStore;

/// Reads and writes the global monitoring flag
#[derive(Clone)]
pub struct MonitoringControl {
    store: Arc<dyn SettingStore>,
    key: String,
    default_enabled: bool,
}

impl MonitoringControl {
    /// Control using the standard key, disabled until first enabled
    pub fn new(store: Arc<dyn SettingStore>) -> Self {
        Self {
            store,
            key: MONITORING_ENABLED_KEY.to_string(),
            default_enabled: false,
        }
    }

    /// Control using the key and default from configuration
    pub fn from_config(store: Arc<dyn SettingStore>, config: &SettingsConfig) -> Self {
        Self {
            store,
            key: config.monitoring_key.clone(),
            default_enabled: config.monitoring_default,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current state of the flag
    pub async fn is_enabled(&self) -> DomainResult<bool> {
        self.store.get_bool(&self.key, self.default_enabled).await
    }

    /// Persist a new state and return it
    pub async fn set_enabled(&self, enabled: bool) -> DomainResult<bool> {
        self.store.set_bool(&self.key, enabled).await?;

        tracing::info!(
            enabled = enabled,
            event = "monitoring_toggled",
            "Monitoring {}",
            if enabled { "enabled" } else { "disabled" }
        );

        Ok(enabled)
    }
}
