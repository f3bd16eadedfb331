//! Infrastructure wiring
//!
//! Turns an [`AppConfig`] into the trait objects the forwarding engine and
//! the rule service depend on.

use std::sync::Arc;

use sf_core::repositories::{InMemoryRuleRepository, InMemorySettingStore, RuleRepository, SettingStore};
use sf_core::services::SmsTransport;
use sf_shared::config::{AppConfig, SettingsBackend, StorageBackend};

use crate::database::{DatabasePool, SqliteRuleRepository, SqliteSettingStore};
use crate::sms::{create_sms_service, MockSmsService, SmsTransportAdapter};
use crate::InfrastructureError;

/// Concrete implementations selected by configuration
#[derive(Clone)]
pub struct Infrastructure {
    pub rules: Arc<dyn RuleRepository>,
    pub settings: Arc<dyn SettingStore>,
    pub transport: Arc<dyn SmsTransport>,
    pub sms: SmsTransportAdapter,
    pub database: Option<DatabasePool>,
}

impl Infrastructure {
    /// Build every backend named in `config`
    ///
    /// The SQLite schema is created on startup. The `database` settings
    /// backend shares the rule store's pool and therefore requires
    /// `database.storage = "sqlite"`.
    pub async fn build(config: &AppConfig) -> Result<Self, InfrastructureError> {
        let database = match config.database.storage {
            StorageBackend::Sqlite => {
                let pool = DatabasePool::new(config.database.clone()).await?;
                pool.migrate().await?;
                Some(pool)
            }
            StorageBackend::Memory => None,
        };

        let rules: Arc<dyn RuleRepository> = match &database {
            Some(pool) => Arc::new(SqliteRuleRepository::new(pool.get_pool().clone())),
            None => Arc::new(InMemoryRuleRepository::new()),
        };

        let settings: Arc<dyn SettingStore> = match config.settings.backend {
            SettingsBackend::Database => {
                let pool = database.as_ref().ok_or_else(|| {
                    InfrastructureError::Config(
                        "settings.backend = \"database\" requires database.storage = \"sqlite\"".to_string(),
                    )
                })?;
                Arc::new(SqliteSettingStore::new(pool.get_pool().clone()))
            }
            #[cfg(feature = "redis-cache")]
            SettingsBackend::Redis => Arc::new(crate::cache::RedisSettingStore::new(&config.settings).await?),
            #[cfg(not(feature = "redis-cache"))]
            SettingsBackend::Redis => {
                return Err(InfrastructureError::Config(
                    "settings.backend = \"redis\" requires the redis-cache feature".to_string(),
                ))
            }
            SettingsBackend::Memory => Arc::new(InMemorySettingStore::new()),
        };

        let sms = SmsTransportAdapter::new(create_sms_service(&config.sms)?);

        tracing::info!(
            storage = ?config.database.storage,
            settings = ?config.settings.backend,
            sms_provider = %sms.provider_name(),
            "Infrastructure initialized"
        );

        Ok(Self {
            rules,
            settings,
            transport: Arc::new(sms.clone()),
            sms,
            database,
        })
    }

    /// In-memory stores with the given mock SMS provider
    pub fn in_memory(sms: MockSmsService) -> Self {
        let sms = SmsTransportAdapter::new(Arc::new(sms));

        Self {
            rules: Arc::new(InMemoryRuleRepository::new()),
            settings: Arc::new(InMemorySettingStore::new()),
            transport: Arc::new(sms.clone()),
            sms,
            database: None,
        }
    }

    /// Name of the configured SMS provider
    pub fn sms_provider(&self) -> &str {
        self.sms.provider_name()
    }

    /// Check the backing database, if any
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        match &self.database {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }
}
