use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/v1/inbound`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InboundSmsRequest {
    /// Originating address: a phone number or an alphanumeric sender id
    #[validate(length(min = 1, max = 64))]
    pub sender: String,

    #[serde(default)]
    pub body: String,
}

/// Form fields posted by a Twilio messaging webhook
#[derive(Debug, Clone, Deserialize)]
pub struct TwilioInboundForm {
    #[serde(rename = "From")]
    pub from: String,

    #[serde(rename = "Body", default)]
    pub body: String,
}
