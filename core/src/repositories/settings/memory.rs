//! In-memory implementation of SettingStore

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::r#trait::SettingStore;

/// Setting store backed by a shared map
#[derive(Clone, Default)]
pub struct InMemorySettingStore {
    values: Arc<RwLock<HashMap<String, bool>>>,
    should_fail: Arc<AtomicBool>,
}

impl InMemorySettingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent access fail
    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Settings {
                message: "in-memory setting store configured to fail".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl SettingStore for InMemorySettingStore {
    async fn get_bool(&self, key: &str, default: bool) -> Result<bool, DomainError> {
        self.check()?;
        let values = self.values.read().await;
        Ok(values.get(key).copied().unwrap_or(default))
    }

    async fn set_bool(&self, key: &str, value: bool) -> Result<(), DomainError> {
        self.check()?;
        self.values.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_until_written() {
        let store = InMemorySettingStore::new();
        assert!(!store.get_bool("monitoring_enabled", false).await.unwrap());
        assert!(store.get_bool("monitoring_enabled", true).await.unwrap());

        store.set_bool("monitoring_enabled", true).await.unwrap();
        assert!(store.get_bool("monitoring_enabled", false).await.unwrap());
    }

    #[tokio::test]
    async fn test_failure_switch() {
        let store = InMemorySettingStore::new();
        store.set_should_fail(true);
        assert!(matches!(
            store.get_bool("k", false).await,
            Err(DomainError::Settings { .. })
        ));
    }
}
