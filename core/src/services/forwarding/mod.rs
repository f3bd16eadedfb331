//! Forwarding service module for inbound SMS
//!
//! This module turns one inbound SMS into zero or more outbound forwards:
//! - Monitoring switch check
//! - Rule loading and matching in stored order
//! - Forwarded text composition and multi-part splitting
//! - Per-rule failure isolation and notifications

mod config;
mod notifier;
pub mod segmentation;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::ForwardingServiceConfig;
pub use notifier::TracingNotifier;
pub use service::{compose_forward_text, ForwardingService};
pub use traits::{ForwardEvent, ForwardNotifier, SmsTransport};
