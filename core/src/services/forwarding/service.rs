//! Main forwarding service implementation

use sf_shared::utils::phone::mask_phone_number;
use std::sync::Arc;

use crate::domain::entities::InboundMessage;
use crate::domain::value_objects::{Delivery, ForwardStatus, InboundReport, RuleOutcome};
use crate::errors::SendError;
use crate::repositories::RuleRepository;
use crate::services::monitoring::MonitoringControl;

use super::config::ForwardingServiceConfig;
use super::notifier::TracingNotifier;
use super::traits::{ForwardEvent, ForwardNotifier, SmsTransport};

/// Text sent to a destination when forwarding a message
pub fn compose_forward_text(original_sender: &str, original_body: &str) -> String {
    format!("Forwarded SMS from {}:\n{}", original_sender, original_body)
}

/// Forwarding service for handling inbound SMS
pub struct ForwardingService {
    /// Source of enabled rules, read on every message
    rules: Arc<dyn RuleRepository>,
    /// Outbound SMS transport
    transport: Arc<dyn SmsTransport>,
    /// Global on/off switch
    monitoring: MonitoringControl,
    /// Receives one event per forward attempt
    notifier: Arc<dyn ForwardNotifier>,
    /// Service configuration
    config: ForwardingServiceConfig,
}

impl ForwardingService {
    /// Create a new forwarding service reporting through `tracing`
    ///
    /// # Arguments
    ///
    /// * `rules` - Rule store implementation
    /// * `transport` - Outbound SMS transport
    /// * `monitoring` - Monitoring switch
    /// * `config` - Service configuration
    pub fn new(
        rules: Arc<dyn RuleRepository>,
        transport: Arc<dyn SmsTransport>,
        monitoring: MonitoringControl,
        config: ForwardingServiceConfig,
    ) -> Self {
        Self {
            rules,
            transport,
            monitoring,
            notifier: Arc::new(TracingNotifier),
            config,
        }
    }

    /// Replace the notifier
    pub fn with_notifier(mut self, notifier: Arc<dyn ForwardNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn monitoring(&self) -> &MonitoringControl {
        &self.monitoring
    }

    /// Handle one inbound SMS
    ///
    /// This method:
    /// 1. Returns immediately when monitoring is off
    /// 2. Loads the current enabled rules
    /// 3. Forwards once per matching rule, in stored order
    ///
    /// Never fails. A store read failure ends processing with nothing
    /// forwarded, a failed forward is recorded and the next rule still runs.
    pub async fn handle_inbound_message(&self, sender_address: &str, body: &str) -> InboundReport {
        self.handle(&InboundMessage::new(sender_address, body)).await
    }

    /// Handle an already constructed inbound message
    pub async fn handle(&self, message: &InboundMessage) -> InboundReport {
        let sender = mask_phone_number(&message.sender_address);

        let enabled = match self.monitoring.is_enabled().await {
            Ok(enabled) => enabled,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    event = "monitoring_read_failed",
                    "Could not read monitoring flag, treating monitoring as disabled"
                );
                false
            }
        };

        if !enabled {
            tracing::debug!(sender = %sender, event = "sms_ignored", "Monitoring disabled, message ignored");
            return InboundReport::monitoring_disabled(message);
        }

        let rules: Vec<_> = match self.rules.list_enabled().await {
            Ok(rules) => rules.into_iter().filter(|rule| rule.is_enabled).collect(),
            Err(e) => {
                tracing::error!(
                    sender = %sender,
                    error = %e,
                    event = "rule_store_unavailable",
                    "Could not load forwarding rules, message not forwarded"
                );
                return InboundReport::store_unavailable(message, e.to_string());
            }
        };

        let mut outcomes = Vec::new();
        for rule in &rules {
            if !rule.matches(&message.sender_address, &message.body) {
                continue;
            }

            tracing::debug!(rule_id = rule.id(), sender = %sender, event = "rule_matched", "Rule matched");

            let status = match self
                .forward(&rule.forward_to_number, &message.sender_address, &message.body)
                .await
            {
                Ok(delivery) => ForwardStatus::Forwarded {
                    parts: delivery.parts,
                    message_ids: delivery.message_ids,
                },
                Err(e) => ForwardStatus::Failed {
                    error: e.to_string(),
                },
            };

            outcomes.push(RuleOutcome {
                rule_id: rule.id(),
                destination: rule.forward_to_number.clone(),
                status,
            });
        }

        let report = InboundReport::processed(message, rules.len(), outcomes);

        tracing::info!(
            sender = %sender,
            rules_evaluated = report.rules_evaluated,
            matched = report.matched_count(),
            forwarded = report.forwarded_count(),
            failed = report.failed_count(),
            event = "sms_processed",
            "Inbound message processed"
        );

        report
    }

    /// Forward one message to one destination
    ///
    /// Texts longer than the configured single-message limit, counted in
    /// UTF-16 code units, are split by the transport and sent as one
    /// multi-part message. The notifier hears about the attempt either way.
    pub async fn forward(
        &self,
        destination: &str,
        original_sender: &str,
        original_body: &str,
    ) -> Result<Delivery, SendError> {
        let text = compose_forward_text(original_sender, original_body);

        let result = if text.encode_utf16().count() > self.config.max_single_message_length {
            let parts = self.transport.split_into_parts(&text);
            if parts.is_empty() {
                Err(SendError::EmptyMessage)
            } else {
                self.transport
                    .send_multipart(destination, &parts)
                    .await
                    .map(|message_ids| Delivery {
                        destination: destination.to_string(),
                        parts: parts.len(),
                        message_ids,
                    })
            }
        } else {
            self.transport
                .send(destination, &text)
                .await
                .map(|message_id| Delivery {
                    destination: destination.to_string(),
                    parts: 1,
                    message_ids: vec![message_id],
                })
        };

        let event = match &result {
            Ok(delivery) => ForwardEvent::Forwarded {
                destination: destination.to_string(),
                parts: delivery.parts,
            },
            Err(e) => ForwardEvent::Failed {
                destination: destination.to_string(),
                error: e.to_string(),
            },
        };
        self.notifier.notify(&event);

        result
    }
}
