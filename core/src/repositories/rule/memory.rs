//! In-memory implementation of RuleRepository
//!
//! Used for the `memory` storage backend and throughout the tests. Clones
//! share the same underlying state.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{ForwardingRule, RuleDraft, RuleId};
use crate::errors::DomainError;

use super::r#trait::RuleRepository;

#[derive(Default)]
struct MemoryState {
    rules: BTreeMap<RuleId, ForwardingRule>,
    last_id: RuleId,
}

/// In-memory rule repository
#[derive(Clone, Default)]
pub struct InMemoryRuleRepository {
    state: Arc<RwLock<MemoryState>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    read_count: Arc<AtomicU64>,
}

impl InMemoryRuleRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent read fail with `StoreRead`
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent write fail with `StoreWrite`
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of read operations served so far
    pub fn read_count(&self) -> u64 {
        self.read_count.load(Ordering::SeqCst)
    }

    fn begin_read(&self) -> Result<(), DomainError> {
        self.read_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::StoreRead {
                message: "in-memory store configured to fail reads".to_string(),
            });
        }
        Ok(())
    }

    fn begin_write(&self) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::StoreWrite {
                message: "in-memory store configured to fail writes".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RuleRepository for InMemoryRuleRepository {
    async fn list_enabled(&self) -> Result<Vec<ForwardingRule>, DomainError> {
        self.begin_read()?;
        let state = self.state.read().await;
        Ok(state
            .rules
            .values()
            .filter(|rule| rule.is_enabled)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<ForwardingRule>, DomainError> {
        self.begin_read()?;
        let state = self.state.read().await;
        Ok(state.rules.values().cloned().collect())
    }

    async fn find_by_id(&self, id: RuleId) -> Result<Option<ForwardingRule>, DomainError> {
        self.begin_read()?;
        let state = self.state.read().await;
        Ok(state.rules.get(&id).cloned())
    }

    async fn insert(&self, draft: &RuleDraft) -> Result<RuleId, DomainError> {
        self.begin_write()?;
        let mut state = self.state.write().await;
        state.last_id += 1;
        let id = state.last_id;
        state
            .rules
            .insert(id, ForwardingRule::from_draft(id, draft.clone()));
        Ok(id)
    }

    async fn update(&self, rule: &ForwardingRule) -> Result<(), DomainError> {
        self.begin_write()?;
        let mut state = self.state.write().await;

        match state.rules.get_mut(&rule.id()) {
            Some(stored) => {
                *stored = rule.clone();
                Ok(())
            }
            None => Err(DomainError::rule_not_found(rule.id())),
        }
    }

    async fn delete(&self, id: RuleId) -> Result<bool, DomainError> {
        self.begin_write()?;
        let mut state = self.state.write().await;
        Ok(state.rules.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.begin_read()?;
        let state = self.state.read().await;
        Ok(state.rules.len() as u64)
    }
}
