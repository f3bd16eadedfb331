//! SMS Service Interface
//!
//! Defines the trait for SMS provider implementations that deliver
//! forwarded messages.

use async_trait::async_trait;

use crate::InfrastructureError;

pub use sf_shared::utils::phone::mask_phone_number;

/// SMS service trait for sending text messages
///
/// Implementations include:
/// - Generic HTTP gateway
/// - Twilio SMS API
/// - Mock implementation for development
#[async_trait]
pub trait SmsService: Send + Sync {
    /// Send an SMS message to a phone number
    ///
    /// # Arguments
    ///
    /// * `phone_number` - The recipient's phone number
    /// * `message` - The message content to send
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Unique identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    ///
    /// # Example
    ///
    /// ```ignore
    /// let service = MockSmsService::new();
    /// let message_id = service.send_sms("+1234567890", "Forwarded SMS from BANK:\nhi").await?;
    /// ```
    async fn send_sms(&self, phone_number: &str, message: &str)
        -> Result<String, InfrastructureError>;

    /// Send pre-split parts of one long message
    ///
    /// Default implementation sends the parts one by one in order and stops
    /// at the first failure. Providers with native concatenation override it.
    async fn send_multipart_sms(
        &self,
        phone_number: &str,
        parts: &[String],
    ) -> Result<Vec<String>, InfrastructureError> {
        let mut message_ids = Vec::with_capacity(parts.len());
        for part in parts {
            message_ids.push(self.send_sms(phone_number, part).await?);
        }
        Ok(message_ids)
    }

    /// Get the service provider name
    ///
    /// Returns the name of the SMS service provider (e.g., "Twilio", "HTTP Gateway", "Mock")
    fn provider_name(&self) -> &str;

    /// Check if the service is available
    ///
    /// Default implementation always returns true.
    async fn is_available(&self) -> bool {
        true
    }
}
