//! Database connection pool management
//!
//! This module provides database connection pooling using SQLx with SQLite.
//! It implements pool configuration, schema creation and health checks.

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::str::FromStr;
use std::time::Duration;

use sf_shared::config::DatabaseConfig;

use crate::InfrastructureError;

const CREATE_RULES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS forwarding_rules (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        sender_number TEXT,
        sender_exact_match INTEGER NOT NULL DEFAULT 0,
        message_content TEXT,
        forward_to_number TEXT NOT NULL CHECK (length(trim(forward_to_number)) > 0),
        is_enabled INTEGER NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
"#;

const CREATE_ENABLED_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_forwarding_rules_enabled
    ON forwarding_rules (is_enabled, id)
"#;

const CREATE_SETTINGS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS settings (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
"#;

/// Database connection pool wrapper
///
/// Manages the SQLite connection pool with configurable settings
/// for connection limits and timeouts.
#[derive(Clone)]
pub struct DatabasePool {
    /// SQLx SQLite connection pool
    pool: SqlitePool,
    /// Configuration used to create this pool
    config: DatabaseConfig,
}

impl DatabasePool {
    /// Create a new database connection pool
    ///
    /// # Arguments
    /// * `config` - Database configuration settings
    ///
    /// # Example
    /// ```no_run
    /// use sf_shared::config::DatabaseConfig;
    /// use sf_infra::database::DatabasePool;
    ///
    /// async fn create_pool() -> Result<DatabasePool, Box<dyn std::error::Error>> {
    ///     let pool = DatabasePool::new(DatabaseConfig::new("sqlite://rules.db")).await?;
    ///     pool.migrate().await?;
    ///     Ok(pool)
    /// }
    /// ```
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            url = %config.url,
            max_connections = config.max_connections,
            "Creating database connection pool"
        );

        let connect_options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
            .create_if_missing(config.create_if_missing);

        let mut pool_options = SqlitePoolOptions::new()
            .acquire_timeout(Duration::from_secs(config.connect_timeout));

        // Every connection to `sqlite::memory:` opens its own empty database,
        // so an in-memory pool must keep exactly one connection alive forever
        pool_options = if config.is_in_memory() {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options
                .max_connections(config.max_connections)
                .idle_timeout(Duration::from_secs(600))
                .max_lifetime(Duration::from_secs(1800))
        };

        let pool = pool_options
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to create database pool");
                InfrastructureError::Database(e)
            })?;

        tracing::info!("Database connection pool created successfully");

        Ok(Self { pool, config })
    }

    /// Open an in-memory database with the schema already created
    pub async fn in_memory() -> Result<Self, InfrastructureError> {
        let pool = Self::new(DatabaseConfig::in_memory()).await?;
        pool.migrate().await?;
        Ok(pool)
    }

    /// Get a reference to the underlying SQLx pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Create the rule and setting tables if they do not exist
    pub async fn migrate(&self) -> Result<(), InfrastructureError> {
        tracing::info!("Running database migrations");

        for statement in [CREATE_RULES_TABLE, CREATE_ENABLED_INDEX, CREATE_SETTINGS_TABLE] {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        tracing::info!("Database migrations completed");
        Ok(())
    }

    /// Check if the database connection is healthy
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        tracing::debug!("Performing database health check");

        let value: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Database health check failed");
                InfrastructureError::Database(e)
            })?;

        Ok(value == 1)
    }

    /// Get connection pool statistics
    pub fn get_statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }

    /// Close all connections in the pool
    ///
    /// This should be called during application shutdown.
    pub async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
    }
}

/// Connection pool statistics
#[derive(Debug, Clone, Copy)]
pub struct PoolStatistics {
    /// Current number of connections
    pub connections: u32,
    /// Number of idle connections
    pub idle_connections: usize,
    /// Maximum allowed connections
    pub max_connections: u32,
}
