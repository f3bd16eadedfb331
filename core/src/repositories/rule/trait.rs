//! Rule repository trait defining the interface for forwarding rule persistence.
//!
//! The store is the source of truth for rules. Every inbound message reads
//! the current set of enabled rules, so implementations must not cache
//! results across calls.

use async_trait::async_trait;

use crate::domain::entities::{ForwardingRule, RuleDraft, RuleId};
use crate::errors::DomainError;

/// Repository trait for ForwardingRule persistence operations
///
/// Listing operations return rules in a stable order (ascending id), which
/// is also the order forwards are attempted in.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use sf_core::repositories::RuleRepository;
/// use sf_core::domain::entities::{ForwardingRule, RuleDraft, RuleId};
/// use sf_core::errors::DomainError;
///
/// struct FileRuleRepository {
///     // file handle
/// }
///
/// #[async_trait]
/// impl RuleRepository for FileRuleRepository {
///     async fn list_enabled(&self) -> Result<Vec<ForwardingRule>, DomainError> {
///         // Implementation here
///         Ok(Vec::new())
///     }
///
///     // ... other methods
/// #   async fn list_all(&self) -> Result<Vec<ForwardingRule>, DomainError> { Ok(Vec::new()) }
/// #   async fn find_by_id(&self, _id: RuleId) -> Result<Option<ForwardingRule>, DomainError> { Ok(None) }
/// #   async fn insert(&self, _draft: &RuleDraft) -> Result<RuleId, DomainError> { Ok(1) }
/// #   async fn update(&self, _rule: &ForwardingRule) -> Result<(), DomainError> { Ok(()) }
/// #   async fn delete(&self, _id: RuleId) -> Result<bool, DomainError> { Ok(false) }
/// #   async fn count(&self) -> Result<u64, DomainError> { Ok(0) }
/// }
/// ```
#[async_trait]
pub trait RuleRepository: Send + Sync {
    /// All rules with `is_enabled == true`
    ///
    /// # Returns
    /// * `Ok(Vec<ForwardingRule>)` - Enabled rules, possibly empty
    /// * `Err(DomainError::StoreRead)` - The store could not be read
    async fn list_enabled(&self) -> Result<Vec<ForwardingRule>, DomainError>;

    /// Every stored rule, enabled or not
    async fn list_all(&self) -> Result<Vec<ForwardingRule>, DomainError>;

    /// Find a rule by id
    ///
    /// # Returns
    /// * `Ok(Some(ForwardingRule))` - Rule found
    /// * `Ok(None)` - No rule with this id
    async fn find_by_id(&self, id: RuleId) -> Result<Option<ForwardingRule>, DomainError>;

    /// Persist a new rule and return its assigned id
    ///
    /// Ids are unique and never reused, even after deletion.
    async fn insert(&self, draft: &RuleDraft) -> Result<RuleId, DomainError>;

    /// Overwrite the stored rule with the same id
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No rule with this id exists
    async fn update(&self, rule: &ForwardingRule) -> Result<(), DomainError>;

    /// Delete a rule, returning whether it existed
    async fn delete(&self, id: RuleId) -> Result<bool, DomainError>;

    /// Number of stored rules
    async fn count(&self) -> Result<u64, DomainError>;
}
