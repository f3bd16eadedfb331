//! Value objects describing the result of handling an inbound message.

pub mod forward_report;

pub use forward_report::{Delivery, ForwardStatus, InboundReport, ProcessingStatus, RuleOutcome};
