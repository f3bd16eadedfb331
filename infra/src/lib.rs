//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the SMS forwarder.
//! It provides concrete implementations for the traits defined in `sf_core`:
//! rule storage, setting storage and outbound SMS providers.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: SQLite rule store and setting store using SQLx
//! - **Cache**: Redis setting store shared between daemon instances
//! - **SMS**: SMS provider integrations (HTTP gateway, Twilio, mock)
//! - **Bootstrap**: Wiring of the above from `AppConfig`
//!
//! ## Features
//!
//! - `redis-cache`: Enable the Redis setting store (default)
//! - `twilio-sms`: Enable the Twilio SMS provider

pub mod bootstrap;

/// Database module - SQLite implementations using SQLx
pub mod database;

/// SMS service module - External SMS providers
pub mod sms;

/// Cache module - Redis backed setting store
#[cfg(feature = "redis-cache")]
pub mod cache;

pub use bootstrap::Infrastructure;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[cfg(feature = "redis-cache")]
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}
