//! Shared utilities and common types for the SMS forwarder
//!
//! This crate provides common functionality used across all workspace crates:
//! - Configuration types and layered loading
//! - Error response structures
//! - Utility functions (phone normalization, masking, etc.)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, Environment, ForwardingConfig, LogFormat, LoggingConfig,
    ServerConfig, SettingsBackend, SettingsConfig, SmsConfig, SmsProvider, StorageBackend,
};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
pub use utils::phone;
