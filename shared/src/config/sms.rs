//! Outbound SMS provider configuration

use serde::{Deserialize, Serialize};

/// SMS service provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsProvider {
    /// Log-only provider for development
    Mock,
    /// Generic HTTP SMS gateway
    Http,
    /// Twilio REST API (requires the `twilio-sms` feature)
    Twilio,
}

impl std::fmt::Display for SmsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SmsProvider::Mock => write!(f, "mock"),
            SmsProvider::Http => write!(f, "http"),
            SmsProvider::Twilio => write!(f, "twilio"),
        }
    }
}

/// SMS service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// SMS service provider
    pub provider: SmsProvider,

    /// API credentials (Twilio account SID, gateway bearer token)
    #[serde(default)]
    pub api_key: String,

    /// API secret/token
    #[serde(default)]
    pub api_secret: String,

    /// From phone number used by providers that need one
    #[serde(default)]
    pub from_number: String,

    /// Endpoint of the HTTP gateway (used when `provider = "http"`)
    #[serde(default)]
    pub gateway_url: Option<String>,

    /// Timeout for provider requests in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: SmsProvider::Mock,
            api_key: String::new(),
            api_secret: String::new(),
            from_number: String::new(),
            gateway_url: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_request_timeout() -> u64 {
    30
}
