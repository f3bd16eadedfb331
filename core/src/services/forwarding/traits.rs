//! Traits for outbound transport and forward notification

use async_trait::async_trait;

use crate::errors::SendError;

use super::segmentation;

/// Outbound SMS capability used by the forwarding service
#[async_trait]
pub trait SmsTransport: Send + Sync {
    /// Send a single-part message, returning the transport message id
    async fn send(&self, destination: &str, text: &str) -> Result<String, SendError>;

    /// Send an ordered list of parts as one concatenated message
    ///
    /// Returns one message id per part.
    async fn send_multipart(
        &self,
        destination: &str,
        parts: &[String],
    ) -> Result<Vec<String>, SendError>;

    /// Split text into parts no longer than one SMS segment
    fn split_into_parts(&self, text: &str) -> Vec<String> {
        segmentation::split_message(text)
    }
}

/// A forward attempt as reported to the notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardEvent {
    Forwarded { destination: String, parts: usize },
    Failed { destination: String, error: String },
}

impl ForwardEvent {
    pub fn destination(&self) -> &str {
        match self {
            ForwardEvent::Forwarded { destination, .. } | ForwardEvent::Failed { destination, .. } => {
                destination
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ForwardEvent::Forwarded { .. })
    }
}

/// Receives one event per forward attempt
///
/// Notifications must not block or fail the forwarding pipeline.
pub trait ForwardNotifier: Send + Sync {
    fn notify(&self, event: &ForwardEvent);
}
