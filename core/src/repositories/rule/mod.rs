//! Forwarding rule repository module.

mod r#trait;
pub use r#trait::RuleRepository;

mod memory;
pub use memory::InMemoryRuleRepository;
