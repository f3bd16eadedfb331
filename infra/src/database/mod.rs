//! Database module - SQLite implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management
//! - Schema creation
//! - Rule store and setting store implementations

pub mod connection;
pub mod sqlite;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use sqlite::{SqliteRuleRepository, SqliteSettingStore};
