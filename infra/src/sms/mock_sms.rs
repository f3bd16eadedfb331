//! Mock SMS Service Implementation
//!
//! A mock implementation of the SMS service for development and testing.
//! This implementation logs SMS messages instead of sending them.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use sf_shared::utils::phone::is_dialable_number;

use super::sms_service::{mask_phone_number, SmsService};
use crate::InfrastructureError;

/// A message accepted by the mock provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentSms {
    pub message_id: String,
    pub phone_number: String,
    pub message: String,
}

/// Mock SMS service for development and testing
///
/// This implementation:
/// - Logs SMS messages
/// - Rejects destinations that are not dialable
/// - Generates mock message IDs
/// - Records sent messages for inspection
#[derive(Clone, Default)]
pub struct MockSmsService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: Arc<AtomicBool>,
    /// Messages accepted so far
    sent: Arc<Mutex<Vec<SentSms>>>,
}

impl MockSmsService {
    /// Create a new mock SMS service
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Messages accepted so far, oldest first
    pub fn sent_messages(&self) -> Vec<SentSms> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SmsService for MockSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        if !is_dialable_number(phone_number) {
            return Err(InfrastructureError::Sms(format!(
                "Invalid phone number format: {}",
                mask_phone_number(phone_number)
            )));
        }

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(
                phone = %mask_phone_number(phone_number),
                "Mock SMS service simulating failure"
            );
            return Err(InfrastructureError::Sms("Simulated SMS failure".to_string()));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            phone = %mask_phone_number(phone_number),
            message_id = %message_id,
            length = message.chars().count(),
            total_sent = count,
            "[MOCK SMS] Message accepted"
        );

        if let Ok(mut sent) = self.sent.lock() {
            sent.push(SentSms {
                message_id: message_id.clone(),
                phone_number: phone_number.to_string(),
                message: message.to_string(),
            });
        }

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure.load(Ordering::SeqCst)
    }
}
