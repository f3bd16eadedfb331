//! SQLite implementation of the SettingStore trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use sf_core::errors::DomainError;
use sf_core::repositories::SettingStore;

/// Settings kept in the `settings` table of the rule database
pub struct SqliteSettingStore {
    pool: SqlitePool,
}

impl SqliteSettingStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingStore for SqliteSettingStore {
    async fn get_bool(&self, key: &str, default: bool) -> Result<bool, DomainError> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM settings WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Settings {
                message: format!("Failed to read setting {}: {}", key, e),
            })?;

        Ok(match value {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(key = key, value = %raw, "Ignoring malformed boolean setting");
                default
            }),
            None => default,
        })
    }

    async fn set_bool(&self, key: &str, value: bool) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO settings (key, value, updated_at) VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#;

        sqlx::query(query)
            .bind(key)
            .bind(value.to_string())
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Settings {
                message: format!("Failed to write setting {}: {}", key, e),
            })?;

        Ok(())
    }
}
