//! Forwarding engine configuration

use serde::{Deserialize, Serialize};

/// Standard single-segment SMS limit
pub const DEFAULT_MAX_SINGLE_MESSAGE_LENGTH: usize = 160;

/// Forwarding engine limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForwardingConfig {
    /// Longest forwarded text (in UTF-16 code units) sent as a single message
    pub max_single_message_length: usize,
}

impl Default for ForwardingConfig {
    fn default() -> Self {
        Self {
            max_single_message_length: DEFAULT_MAX_SINGLE_MESSAGE_LENGTH,
        }
    }
}
