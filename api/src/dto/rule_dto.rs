use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use sf_core::domain::{ForwardingRule, RuleDraft, RuleId};

/// Body of `POST /api/v1/rules` and `PUT /api/v1/rules/{id}`
///
/// A missing `forward_to_number` deserializes as empty and is rejected by
/// rule validation with "Forward destination required".
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RuleRequest {
    #[serde(default)]
    #[validate(length(max = 64))]
    pub sender_number: Option<String>,

    #[serde(default)]
    pub sender_exact_match: bool,

    #[serde(default)]
    #[validate(length(max = 1000))]
    pub message_content: Option<String>,

    #[serde(default)]
    #[validate(length(max = 32))]
    pub forward_to_number: String,

    #[serde(default = "default_enabled")]
    pub is_enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl From<RuleRequest> for RuleDraft {
    fn from(request: RuleRequest) -> Self {
        Self {
            sender_number: request.sender_number,
            sender_exact_match: request.sender_exact_match,
            message_content: request.message_content,
            forward_to_number: request.forward_to_number,
            is_enabled: request.is_enabled,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetEnabledRequest {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleResponse {
    pub id: RuleId,
    pub sender_number: Option<String>,
    pub sender_exact_match: bool,
    pub message_content: Option<String>,
    pub forward_to_number: String,
    pub is_enabled: bool,
    pub sender_display: String,
    pub content_display: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&ForwardingRule> for RuleResponse {
    fn from(rule: &ForwardingRule) -> Self {
        Self {
            id: rule.id(),
            sender_number: rule.sender_number.clone(),
            sender_exact_match: rule.sender_exact_match,
            message_content: rule.message_content.clone(),
            forward_to_number: rule.forward_to_number.clone(),
            is_enabled: rule.is_enabled,
            sender_display: rule.sender_display(),
            content_display: rule.content_display(),
            created_at: rule.created_at,
            updated_at: rule.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleListResponse {
    pub rules: Vec<RuleResponse>,
    pub total: usize,
}

impl From<Vec<ForwardingRule>> for RuleListResponse {
    fn from(rules: Vec<ForwardingRule>) -> Self {
        let rules: Vec<RuleResponse> = rules.iter().map(RuleResponse::from).collect();
        Self {
            total: rules.len(),
            rules,
        }
    }
}
