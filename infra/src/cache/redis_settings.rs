//! Redis setting store implementation
//!
//! Flags are stored as `"true"` / `"false"` strings under
//! `<key_prefix><key>`, without expiry.

use async_trait::async_trait;
use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use sf_core::errors::DomainError;
use sf_core::repositories::SettingStore;
use sf_shared::config::SettingsConfig;

use crate::InfrastructureError;

/// Setting store on a shared Redis server
#[derive(Clone)]
pub struct RedisSettingStore {
    /// Redis multiplexed connection for async operations
    connection: MultiplexedConnection,
    /// Prefix prepended to every key
    key_prefix: String,
}

impl RedisSettingStore {
    /// Connect to Redis using the settings configuration
    ///
    /// # Example
    /// ```no_run
    /// use sf_shared::config::SettingsConfig;
    /// use sf_infra::cache::RedisSettingStore;
    ///
    /// async fn connect() -> Result<RedisSettingStore, Box<dyn std::error::Error>> {
    ///     Ok(RedisSettingStore::new(&SettingsConfig::default()).await?)
    /// }
    /// ```
    pub async fn new(config: &SettingsConfig) -> Result<Self, InfrastructureError> {
        Self::new_with_retry_config(config, 3, 100).await
    }

    /// Connect with custom retry configuration
    ///
    /// # Arguments
    /// * `config` - Settings configuration with the Redis URL and key prefix
    /// * `max_retries` - Maximum number of connection attempts
    /// * `retry_delay_ms` - Base delay between attempts, doubled each time
    pub async fn new_with_retry_config(
        config: &SettingsConfig,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<Self, InfrastructureError> {
        info!(url = %mask_url(&config.redis_url), "Creating Redis setting store");

        let client = Client::open(config.redis_url.as_str()).map_err(|e| {
            error!(error = %e, "Failed to parse Redis URL");
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection = Self::connect_with_retry(client, max_retries, retry_delay_ms).await?;

        Ok(Self {
            connection,
            key_prefix: config.key_prefix.clone(),
        })
    }

    async fn connect_with_retry(
        client: Client,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = retry_delay_ms;

        loop {
            attempts += 1;
            debug!(attempt = attempts, "Connecting to Redis");

            match client.get_multiplexed_async_connection().await {
                Ok(connection) => return Ok(connection),
                Err(e) if attempts < max_retries => {
                    warn!(attempt = attempts, error = %e, "Redis connection failed, retrying");
                    sleep(Duration::from_millis(delay)).await;
                    delay *= 2;
                }
                Err(e) => {
                    error!(attempts = attempts, error = %e, "Giving up connecting to Redis");
                    return Err(InfrastructureError::Cache(e));
                }
            }
        }
    }

    /// Full Redis key for a setting
    pub fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    fn settings_error(action: &str, key: &str, e: redis::RedisError) -> DomainError {
        DomainError::Settings {
            message: format!("Failed to {} setting {}: {}", action, key, e),
        }
    }
}

#[async_trait]
impl SettingStore for RedisSettingStore {
    async fn get_bool(&self, key: &str, default: bool) -> Result<bool, DomainError> {
        let mut conn = self.connection.clone();
        let raw = conn
            .get::<_, Option<String>>(self.full_key(key))
            .await
            .map_err(|e| Self::settings_error("read", key, e))?;

        Ok(match raw {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(key = key, value = %raw, "Ignoring malformed boolean setting");
                default
            }),
            None => default,
        })
    }

    async fn set_bool(&self, key: &str, value: bool) -> Result<(), DomainError> {
        let mut conn = self.connection.clone();
        conn.set::<_, _, ()>(self.full_key(key), value.to_string())
            .await
            .map_err(|e| Self::settings_error("write", key, e))
    }
}

/// Hide credentials in a Redis URL for logging
pub fn mask_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}****{}", &url[..scheme_end + 3], &url[at..])
        }
        _ => url.to_string(),
    }
}
