//! Domain entities representing core business objects.

pub mod forwarding_rule;
pub mod inbound_message;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use forwarding_rule::{ForwardingRule, RuleDraft, RuleId};
pub use inbound_message::InboundMessage;
