//! Per-message forwarding report
//!
//! Handling an inbound message never fails as a whole. Instead the
//! forwarding service returns an [`InboundReport`] that records whether
//! rules were consulted at all and what happened for every matched rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{InboundMessage, RuleId};

/// A successful forward to one destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub destination: String,

    /// Number of SMS parts handed to the transport
    pub parts: usize,

    /// Transport message ids, one per part
    pub message_ids: Vec<String>,
}

/// Result of forwarding for one matched rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ForwardStatus {
    Forwarded { parts: usize, message_ids: Vec<String> },
    Failed { error: String },
}

impl ForwardStatus {
    pub fn is_forwarded(&self) -> bool {
        matches!(self, ForwardStatus::Forwarded { .. })
    }
}

/// Outcome for a single matched rule, in stored rule order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule_id: RuleId,
    pub destination: String,
    #[serde(flatten)]
    pub status: ForwardStatus,
}

/// How far processing of an inbound message went
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProcessingStatus {
    /// Monitoring switch was off, no rule was read
    MonitoringDisabled,
    /// Enabled rules were evaluated
    Processed,
    /// Enabled rules could not be loaded, nothing was forwarded
    StoreUnavailable { error: String },
}

/// Report for one inbound message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundReport {
    pub sender_address: String,
    pub received_at: DateTime<Utc>,
    pub status: ProcessingStatus,

    /// Enabled rules considered for this message
    pub rules_evaluated: usize,

    /// One entry per matched rule
    pub outcomes: Vec<RuleOutcome>,
}

impl InboundReport {
    pub fn monitoring_disabled(message: &InboundMessage) -> Self {
        Self::empty(message, ProcessingStatus::MonitoringDisabled)
    }

    pub fn store_unavailable(message: &InboundMessage, error: impl Into<String>) -> Self {
        Self::empty(
            message,
            ProcessingStatus::StoreUnavailable {
                error: error.into(),
            },
        )
    }

    pub fn processed(
        message: &InboundMessage,
        rules_evaluated: usize,
        outcomes: Vec<RuleOutcome>,
    ) -> Self {
        Self {
            sender_address: message.sender_address.clone(),
            received_at: message.received_at,
            status: ProcessingStatus::Processed,
            rules_evaluated,
            outcomes,
        }
    }

    fn empty(message: &InboundMessage, status: ProcessingStatus) -> Self {
        Self {
            sender_address: message.sender_address.clone(),
            received_at: message.received_at,
            status,
            rules_evaluated: 0,
            outcomes: Vec::new(),
        }
    }

    pub fn matched_count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn forwarded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.is_forwarded()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.matched_count() - self.forwarded_count()
    }

    /// Destinations of matched rules, in the order they were attempted
    pub fn destinations(&self) -> Vec<&str> {
        self.outcomes.iter().map(|o| o.destination.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(rule_id: RuleId, status: ForwardStatus) -> RuleOutcome {
        RuleOutcome {
            rule_id,
            destination: format!("+{}", rule_id),
            status,
        }
    }

    #[test]
    fn test_counts() {
        let message = InboundMessage::new("+1555", "hi");
        let report = InboundReport::processed(
            &message,
            3,
            vec![
                outcome(1, ForwardStatus::Forwarded { parts: 1, message_ids: vec!["a".into()] }),
                outcome(2, ForwardStatus::Failed { error: "boom".into() }),
            ],
        );

        assert_eq!(report.matched_count(), 2);
        assert_eq!(report.forwarded_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.destinations(), vec!["+1", "+2"]);
    }

    #[test]
    fn test_disabled_report_is_empty() {
        let message = InboundMessage::new("+1555", "hi");
        let report = InboundReport::monitoring_disabled(&message);
        assert_eq!(report.status, ProcessingStatus::MonitoringDisabled);
        assert_eq!(report.rules_evaluated, 0);
        assert!(report.outcomes.is_empty());
    }

    #[test]
    fn test_outcome_serialization_is_flat() {
        let json = serde_json::to_value(outcome(
            4,
            ForwardStatus::Failed { error: "no signal".into() },
        ))
        .unwrap();

        assert_eq!(json["rule_id"], 4);
        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"], "no signal");
    }
}
