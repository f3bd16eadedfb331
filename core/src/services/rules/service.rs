//! Rule management service implementation

use std::sync::Arc;

use crate::domain::entities::{ForwardingRule, RuleDraft, RuleId};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::RuleRepository;

/// CRUD over forwarding rules with input validation
#[derive(Clone)]
pub struct RuleService {
    repository: Arc<dyn RuleRepository>,
}

impl RuleService {
    pub fn new(repository: Arc<dyn RuleRepository>) -> Self {
        Self { repository }
    }

    /// Validate and persist a new rule
    ///
    /// # Returns
    ///
    /// * `Ok(ForwardingRule)` - The stored rule with its assigned id
    /// * `Err(DomainError::Validation)` - The draft was rejected, nothing was stored
    pub async fn create(&self, draft: RuleDraft) -> DomainResult<ForwardingRule> {
        let draft = draft.normalized();
        draft.validate()?;

        let id = self.repository.insert(&draft).await?;
        let rule = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::Internal {
                message: format!("rule {} missing right after insert", id),
            })?;

        tracing::info!(
            rule_id = id,
            sender = %rule.sender_display(),
            content = %rule.content_display(),
            enabled = rule.is_enabled,
            event = "rule_created",
            "Forwarding rule created"
        );

        Ok(rule)
    }

    /// Replace the editable fields of an existing rule
    pub async fn update(&self, id: RuleId, draft: RuleDraft) -> DomainResult<ForwardingRule> {
        let draft = draft.normalized();
        draft.validate()?;

        let mut rule = self.get(id).await?;
        rule.apply(draft);
        self.repository.update(&rule).await?;

        tracing::info!(rule_id = id, event = "rule_updated", "Forwarding rule updated");
        Ok(rule)
    }

    /// Enable or disable a rule without touching its other fields
    pub async fn set_enabled(&self, id: RuleId, enabled: bool) -> DomainResult<ForwardingRule> {
        let mut rule = self.get(id).await?;
        rule.set_enabled(enabled);
        self.repository.update(&rule).await?;

        tracing::info!(
            rule_id = id,
            enabled = enabled,
            event = "rule_toggled",
            "Forwarding rule toggled"
        );
        Ok(rule)
    }

    /// Delete a rule. Deleting an unknown id is a `NotFound` error.
    pub async fn delete(&self, id: RuleId) -> DomainResult<()> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::rule_not_found(id));
        }

        tracing::info!(rule_id = id, event = "rule_deleted", "Forwarding rule deleted");
        Ok(())
    }

    pub async fn get(&self, id: RuleId) -> DomainResult<ForwardingRule> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::rule_not_found(id))
    }

    pub async fn list(&self) -> DomainResult<Vec<ForwardingRule>> {
        self.repository.list_all().await
    }

    pub async fn list_enabled(&self) -> DomainResult<Vec<ForwardingRule>> {
        self.repository.list_enabled().await
    }

    pub async fn count(&self) -> DomainResult<u64> {
        self.repository.count().await
    }
}
