//! SMS Service Module
//!
//! This module provides the outbound SMS providers used to deliver forwarded
//! messages, plus the adapter that exposes any of them to the forwarding
//! engine as an `SmsTransport`.
//!
//! ## Features
//!
//! - **SMS Service Trait**: Common interface for all SMS providers
//! - **Mock Implementation**: Log-only provider for development
//! - **HTTP Gateway**: Generic JSON-over-HTTP SMS gateway
//! - **Twilio Support**: Production SMS via Twilio API (`twilio-sms` feature)
//! - **Security**: Phone number masking in logs

use std::sync::Arc;

use sf_shared::config::{SmsConfig, SmsProvider};

pub mod http_gateway;
pub mod mock_sms;
pub mod sms_service;
pub mod transport_adapter;

// Twilio SMS service (feature-gated)
#[cfg(feature = "twilio-sms")]
pub mod twilio;

// Re-export commonly used types
pub use http_gateway::HttpGatewaySmsService;
pub use mock_sms::MockSmsService;
pub use sms_service::{mask_phone_number, SmsService};
pub use transport_adapter::SmsTransportAdapter;

#[cfg(feature = "twilio-sms")]
pub use twilio::{TwilioConfig, TwilioSmsService};

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create an SMS service based on configuration
///
/// Returns the SMS provider selected by `config.provider`. A provider that
/// is not compiled in, or whose settings are incomplete, is a configuration
/// error. There is no fallback to the mock provider.
pub fn create_sms_service(config: &SmsConfig) -> Result<Arc<dyn SmsService>, InfrastructureError> {
    let service: Arc<dyn SmsService> = match config.provider {
        SmsProvider::Mock => Arc::new(MockSmsService::new()),
        SmsProvider::Http => Arc::new(HttpGatewaySmsService::from_config(config)?),
        #[cfg(feature = "twilio-sms")]
        SmsProvider::Twilio => Arc::new(TwilioSmsService::new(TwilioConfig::from_sms_config(config)?)?),
        #[cfg(not(feature = "twilio-sms"))]
        SmsProvider::Twilio => {
            return Err(InfrastructureError::Config(
                "SMS provider 'twilio' requires the twilio-sms feature".to_string(),
            ))
        }
    };

    tracing::info!(provider = service.provider_name(), "SMS provider initialized");
    Ok(service)
}
