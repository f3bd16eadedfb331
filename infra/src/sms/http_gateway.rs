//! Generic HTTP SMS gateway
//!
//! Posts JSON to a configurable endpoint:
//!
//! ```text
//! POST <gateway_url>
//! Authorization: Bearer <api_key>        (when api_key is set)
//! {"to": "+15550001111", "from": "+1555...", "parts": ["...", "..."]}
//! ```
//!
//! A single message is sent as one part. Any 2xx response is success. The
//! gateway may answer `{"message_ids": [...]}`; otherwise ids are generated.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};
use uuid::Uuid;

use sf_shared::config::SmsConfig;

use super::sms_service::{mask_phone_number, SmsService};
use crate::InfrastructureError;

#[derive(Debug, Serialize)]
struct GatewayRequest<'a> {
    to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<&'a str>,
    parts: &'a [String],
}

#[derive(Debug, Default, Deserialize)]
struct GatewayResponse {
    #[serde(default)]
    message_ids: Vec<String>,
}

/// SMS provider backed by an HTTP gateway
pub struct HttpGatewaySmsService {
    client: Client,
    url: String,
    api_key: Option<String>,
    from_number: Option<String>,
}

impl HttpGatewaySmsService {
    /// Create a gateway client
    ///
    /// # Arguments
    /// * `url` - Gateway endpoint receiving the JSON payload
    /// * `api_key` - Bearer token, if the gateway requires one
    /// * `from_number` - Sender address passed through to the gateway
    /// * `timeout` - Request timeout
    pub fn new(
        url: impl Into<String>,
        api_key: Option<String>,
        from_number: Option<String>,
        timeout: Duration,
    ) -> Result<Self, InfrastructureError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.into(),
            api_key: api_key.filter(|k| !k.is_empty()),
            from_number: from_number.filter(|n| !n.is_empty()),
        })
    }

    /// Create from the SMS configuration section
    pub fn from_config(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        let url = config
            .gateway_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| {
                InfrastructureError::Config("sms.gateway_url is required for the http provider".to_string())
            })?;

        Self::new(
            url,
            Some(config.api_key.clone()),
            Some(config.from_number.clone()),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    async fn post(&self, phone_number: &str, parts: &[String]) -> Result<Vec<String>, InfrastructureError> {
        let body = GatewayRequest {
            to: phone_number,
            from: self.from_number.as_deref(),
            parts,
        };

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        debug!(
            phone = %mask_phone_number(phone_number),
            parts = parts.len(),
            "Posting SMS to gateway"
        );

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(
                phone = %mask_phone_number(phone_number),
                status = status.as_u16(),
                "SMS gateway rejected message"
            );
            return Err(InfrastructureError::Sms(format!(
                "Gateway returned {}: {}",
                status, detail
            )));
        }

        // Gateways that return no body or a different shape still count as accepted
        let parsed: GatewayResponse = response.json().await.unwrap_or_default();
        let message_ids = if parsed.message_ids.len() == parts.len() {
            parsed.message_ids
        } else {
            parts.iter().map(|_| format!("http_{}", Uuid::new_v4())).collect()
        };

        info!(
            phone = %mask_phone_number(phone_number),
            parts = parts.len(),
            "SMS accepted by gateway"
        );
        Ok(message_ids)
    }
}

#[async_trait]
impl SmsService for HttpGatewaySmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let mut ids = self.post(phone_number, &[message.to_string()]).await?;
        ids.pop()
            .ok_or_else(|| InfrastructureError::Sms("Gateway returned no message id".to_string()))
    }

    async fn send_multipart_sms(
        &self,
        phone_number: &str,
        parts: &[String],
    ) -> Result<Vec<String>, InfrastructureError> {
        self.post(phone_number, parts).await
    }

    fn provider_name(&self) -> &str {
        "HTTP Gateway"
    }
}
