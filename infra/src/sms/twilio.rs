//! Twilio SMS Service Implementation
//!
//! This module provides SMS sending capabilities using the Twilio API.
//!
//! ## Features
//!
//! - E.164 normalization of destinations
//! - Retry with exponential backoff on rate limiting and server errors
//! - Native concatenation of multi-part messages
//! - Phone number masking in logs

use async_trait::async_trait;
use phonenumber::{Mode, PhoneNumber};
use std::time::Duration;
use tracing::{debug, error, info, warn};
use twilio::{Client, OutboundMessage};

use sf_shared::config::SmsConfig;
use sf_shared::utils::phone::{is_valid_e164, normalize_phone_number};

use crate::{
    sms::sms_service::{mask_phone_number, SmsService},
    InfrastructureError,
};

/// Longest body Twilio accepts in one request
pub const TWILIO_MAX_BODY_LENGTH: usize = 1600;

/// Twilio SMS service configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
    /// Maximum retry attempts for failed requests
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
}

impl TwilioConfig {
    /// Build from the SMS configuration section
    ///
    /// `api_key` holds the account SID and `api_secret` the auth token.
    pub fn from_sms_config(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.is_empty() || config.api_secret.is_empty() {
            return Err(InfrastructureError::Config(
                "sms.api_key and sms.api_secret are required for the twilio provider".to_string(),
            ));
        }

        if !config.from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "sms.from_number must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Ok(Self {
            account_sid: config.api_key.clone(),
            auth_token: config.api_secret.clone(),
            from_number: config.from_number.clone(),
            max_retries: 3,
            retry_delay_ms: 1000,
        })
    }
}

/// Twilio SMS service implementation
pub struct TwilioSmsService {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsService {
    /// Create a new Twilio SMS service
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        let client = Client::new(&config.account_sid, &config.auth_token);

        info!(
            from = %mask_phone_number(&config.from_number),
            "Twilio SMS service initialized"
        );

        Ok(Self { client, config })
    }

    /// Validate and normalize phone number to E.164 format
    fn validate_phone_number(&self, phone: &str) -> Result<String, InfrastructureError> {
        let candidate = normalize_phone_number(phone);

        if !is_valid_e164(&candidate) {
            return Err(InfrastructureError::Sms(
                "Phone number must be in E.164 format (e.g., +1234567890)".to_string(),
            ));
        }

        candidate
            .parse::<PhoneNumber>()
            .map(|parsed| parsed.format().mode(Mode::E164).to_string())
            .map_err(|e| InfrastructureError::Sms(format!("Invalid phone number format: {}", e)))
    }

    /// Send SMS with retry logic
    async fn send_with_retry(&self, to: &str, message: &str) -> Result<String, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;

            debug!(
                attempt = attempts,
                max_retries = self.config.max_retries,
                to = %mask_phone_number(to),
                "Sending SMS via Twilio"
            );

            let msg = OutboundMessage::new(&self.config.from_number, to, message);

            match self.client.send_message(msg).await {
                Ok(response) => {
                    info!(
                        to = %mask_phone_number(to),
                        sid = %response.sid,
                        "SMS sent successfully"
                    );
                    return Ok(response.sid);
                }
                Err(e) => {
                    error!(attempt = attempts, error = %e, "Failed to send SMS via Twilio");

                    if attempts >= self.config.max_retries {
                        return Err(InfrastructureError::Sms(format!(
                            "Failed to send SMS after {} attempts: {}",
                            self.config.max_retries, e
                        )));
                    }

                    let error_msg = e.to_string();
                    if !is_retryable(&error_msg) {
                        return Err(InfrastructureError::Sms(format!("Invalid request: {}", e)));
                    }

                    warn!(delay_ms = delay.as_millis() as u64, "Retrying Twilio request");
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }
}

/// Rate limiting and server errors are worth retrying, client errors are not
fn is_retryable(error_msg: &str) -> bool {
    let lower = error_msg.to_lowercase();
    if lower.contains("400") || lower.contains("invalid") {
        return false;
    }
    ["429", "rate", "500", "502", "503", "504", "timeout"]
        .iter()
        .any(|marker| lower.contains(marker))
}

#[async_trait]
impl SmsService for TwilioSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let normalized_phone = self.validate_phone_number(phone_number)?;

        if message.chars().count() > TWILIO_MAX_BODY_LENGTH {
            return Err(InfrastructureError::Sms(format!(
                "Message exceeds maximum length of {} characters",
                TWILIO_MAX_BODY_LENGTH
            )));
        }

        self.send_with_retry(&normalized_phone, message).await
    }

    /// Twilio concatenates long bodies itself, so parts are rejoined and
    /// sent as one request. The single SID is returned for the whole message.
    async fn send_multipart_sms(
        &self,
        phone_number: &str,
        parts: &[String],
    ) -> Result<Vec<String>, InfrastructureError> {
        let joined = parts.concat();
        if joined.chars().count() <= TWILIO_MAX_BODY_LENGTH {
            return Ok(vec![self.send_sms(phone_number, &joined).await?]);
        }

        let mut sids = Vec::with_capacity(parts.len());
        for part in parts {
            sids.push(self.send_sms(phone_number, part).await?);
        }
        Ok(sids)
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}
