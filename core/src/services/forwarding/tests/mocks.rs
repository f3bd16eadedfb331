//! Mock implementations for testing forwarding service

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::errors::SendError;
use crate::services::forwarding::traits::{ForwardEvent, ForwardNotifier, SmsTransport};

/// One call made to the mock transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentMessage {
    Single { destination: String, text: String },
    Multipart { destination: String, parts: Vec<String> },
}

impl SentMessage {
    pub fn destination(&self) -> &str {
        match self {
            SentMessage::Single { destination, .. } | SentMessage::Multipart { destination, .. } => {
                destination
            }
        }
    }
}

// Mock SMS transport for testing
pub struct MockTransport {
    pub sent: Arc<Mutex<Vec<SentMessage>>>,
    pub failing_destinations: HashSet<String>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            failing_destinations: HashSet::new(),
        }
    }

    /// Transport that fails every send to `destination`
    pub fn failing_for(destination: &str) -> Self {
        let mut transport = Self::new();
        transport.failing_destinations.insert(destination.to_string());
        transport
    }

    pub fn sent_messages(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn destinations(&self) -> Vec<String> {
        self.sent_messages()
            .iter()
            .map(|m| m.destination().to_string())
            .collect()
    }

    fn check(&self, destination: &str) -> Result<(), SendError> {
        if self.failing_destinations.contains(destination) {
            return Err(SendError::transport(destination, "radio off"));
        }
        Ok(())
    }
}

#[async_trait]
impl SmsTransport for MockTransport {
    async fn send(&self, destination: &str, text: &str) -> Result<String, SendError> {
        self.check(destination)?;
        let mut sent = self.sent.lock().unwrap();
        sent.push(SentMessage::Single {
            destination: destination.to_string(),
            text: text.to_string(),
        });
        Ok(format!("mock-msg-{}", sent.len()))
    }

    async fn send_multipart(
        &self,
        destination: &str,
        parts: &[String],
    ) -> Result<Vec<String>, SendError> {
        self.check(destination)?;
        let mut sent = self.sent.lock().unwrap();
        sent.push(SentMessage::Multipart {
            destination: destination.to_string(),
            parts: parts.to_vec(),
        });
        let n = sent.len();
        Ok((0..parts.len()).map(|i| format!("mock-msg-{}-{}", n, i)).collect())
    }
}

// Notifier recording every event
#[derive(Default)]
pub struct RecordingNotifier {
    pub events: Mutex<Vec<ForwardEvent>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<ForwardEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ForwardNotifier for RecordingNotifier {
    fn notify(&self, event: &ForwardEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
