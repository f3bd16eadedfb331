//! Inbound SMS as delivered by the carrier

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A received SMS. Multi-part messages arrive already reassembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Originating address as reported by the carrier
    pub sender_address: String,

    /// Full message text
    pub body: String,

    pub received_at: DateTime<Utc>,
}

impl InboundMessage {
    pub fn new(sender_address: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender_address: sender_address.into(),
            body: body.into(),
            received_at: Utc::now(),
        }
    }
}
