//! Configuration for the forwarding service

use sf_shared::config::forwarding::DEFAULT_MAX_SINGLE_MESSAGE_LENGTH;
use sf_shared::config::ForwardingConfig;

/// Configuration for the forwarding service
#[derive(Debug, Clone)]
pub struct ForwardingServiceConfig {
    /// Forwarded texts longer than this many UTF-16 code units are sent multi-part
    pub max_single_message_length: usize,
}

impl Default for ForwardingServiceConfig {
    fn default() -> Self {
        Self {
            max_single_message_length: DEFAULT_MAX_SINGLE_MESSAGE_LENGTH,
        }
    }
}

impl From<&ForwardingConfig> for ForwardingServiceConfig {
    fn from(config: &ForwardingConfig) -> Self {
        Self {
            max_single_message_length: config.max_single_message_length,
        }
    }
}
