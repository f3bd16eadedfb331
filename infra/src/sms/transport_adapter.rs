//! SMS Service Transport Adapter
//!
//! Bridges any infrastructure `SmsService` to the core `SmsTransport` trait
//! used by the forwarding engine.

use async_trait::async_trait;
use std::sync::Arc;

use sf_core::errors::SendError;
use sf_core::services::SmsTransport;

use super::sms_service::SmsService;
use crate::InfrastructureError;

/// Adapter that implements the core SmsTransport for an SMS provider
#[derive(Clone)]
pub struct SmsTransportAdapter {
    inner: Arc<dyn SmsService>,
}

impl SmsTransportAdapter {
    pub fn new(inner: Arc<dyn SmsService>) -> Self {
        Self { inner }
    }

    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }

    /// Whether the provider currently reports itself able to send
    pub async fn is_available(&self) -> bool {
        self.inner.is_available().await
    }

    fn to_send_error(destination: &str, error: InfrastructureError) -> SendError {
        SendError::transport(destination, error)
    }
}

#[async_trait]
impl SmsTransport for SmsTransportAdapter {
    async fn send(&self, destination: &str, text: &str) -> Result<String, SendError> {
        self.inner
            .send_sms(destination, text)
            .await
            .map_err(|e| Self::to_send_error(destination, e))
    }

    async fn send_multipart(
        &self,
        destination: &str,
        parts: &[String],
    ) -> Result<Vec<String>, SendError> {
        if parts.is_empty() {
            return Err(SendError::EmptyMessage);
        }
        self.inner
            .send_multipart_sms(destination, parts)
            .await
            .map_err(|e| Self::to_send_error(destination, e))
    }
}
