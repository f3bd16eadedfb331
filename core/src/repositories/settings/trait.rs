//! Key-value setting store trait

use async_trait::async_trait;

use crate::errors::DomainError;

/// Persistent boolean preferences keyed by name
///
/// Values written with `set_bool` must survive restarts for every
/// implementation except the in-memory one.
#[async_trait]
pub trait SettingStore: Send + Sync {
    /// Read a flag, returning `default` when the key was never written
    ///
    /// # Returns
    /// * `Err(DomainError::Settings)` - The backing store is unreachable
    async fn get_bool(&self, key: &str, default: bool) -> Result<bool, DomainError>;

    /// Write a flag
    async fn set_bool(&self, key: &str, value: bool) -> Result<(), DomainError>;
}
