//! Forwarding rule entity and the draft used to create or edit one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sf_shared::utils::phone::is_dialable_number;
use std::fmt;

use crate::domain::matcher;
use crate::errors::ValidationError;

/// Identifier assigned by the rule store on insert
pub type RuleId = i64;

/// A persisted forwarding rule
///
/// A rule forwards an inbound SMS to `forward_to_number` when both of its
/// optional filters accept the message. A blank filter accepts everything,
/// so a rule with neither filter is a catch-all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardingRule {
    /// Store-assigned identifier, fixed for the life of the rule
    id: RuleId,

    /// Sender filter; `None` or blank means any sender
    pub sender_number: Option<String>,

    /// Exact equality when true, substring containment when false
    pub sender_exact_match: bool,

    /// Case-insensitive content filter; `None` or blank means any content
    pub message_content: Option<String>,

    /// Destination address for forwarded messages
    pub forward_to_number: String,

    /// Only enabled rules take part in matching
    pub is_enabled: bool,

    /// Timestamp when the rule was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the rule was last changed
    pub updated_at: DateTime<Utc>,
}

impl ForwardingRule {
    /// Build a rule from a draft with a freshly assigned id
    pub fn from_draft(id: RuleId, draft: RuleDraft) -> Self {
        let now = Utc::now();
        Self::restore(id, draft, now, now)
    }

    /// Rebuild a rule loaded from storage
    pub fn restore(
        id: RuleId,
        draft: RuleDraft,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            sender_number: draft.sender_number,
            sender_exact_match: draft.sender_exact_match,
            message_content: draft.message_content,
            forward_to_number: draft.forward_to_number,
            is_enabled: draft.is_enabled,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> RuleId {
        self.id
    }

    /// Sender filter, if one is set and non-blank
    pub fn sender_filter(&self) -> Option<&str> {
        non_blank(self.sender_number.as_deref())
    }

    /// Content filter, if one is set and non-blank
    pub fn content_filter(&self) -> Option<&str> {
        non_blank(self.message_content.as_deref())
    }

    /// True when the rule accepts every message
    pub fn is_catch_all(&self) -> bool {
        self.sender_filter().is_none() && self.content_filter().is_none()
    }

    /// Whether this rule accepts a message from `sender_address` with `body`
    pub fn matches(&self, sender_address: &str, body: &str) -> bool {
        matcher::matches(self, sender_address, body)
    }

    /// Human readable sender filter, e.g. `+15551234567 (Exact)`
    pub fn sender_display(&self) -> String {
        match self.sender_filter() {
            Some(sender) if self.sender_exact_match => format!("{} (Exact)", sender),
            Some(sender) => format!("{} (Partial)", sender),
            None => "Any sender".to_string(),
        }
    }

    /// Human readable content filter
    pub fn content_display(&self) -> String {
        self.content_filter()
            .map(str::to_string)
            .unwrap_or_else(|| "Any content".to_string())
    }

    /// Replace every editable field with the draft's values
    pub fn apply(&mut self, draft: RuleDraft) {
        self.sender_number = draft.sender_number;
        self.sender_exact_match = draft.sender_exact_match;
        self.message_content = draft.message_content;
        self.forward_to_number = draft.forward_to_number;
        self.is_enabled = draft.is_enabled;
        self.updated_at = Utc::now();
    }

    /// Enables or disables the rule
    pub fn set_enabled(&mut self, enabled: bool) {
        self.is_enabled = enabled;
        self.updated_at = Utc::now();
    }

    /// Editable fields of this rule as a draft
    pub fn to_draft(&self) -> RuleDraft {
        RuleDraft {
            sender_number: self.sender_number.clone(),
            sender_exact_match: self.sender_exact_match,
            message_content: self.message_content.clone(),
            forward_to_number: self.forward_to_number.clone(),
            is_enabled: self.is_enabled,
        }
    }
}

impl fmt::Display for ForwardingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} [{} | {}] -> {}",
            self.id,
            self.sender_display(),
            self.content_display(),
            self.forward_to_number
        )
    }
}

/// Editable fields of a forwarding rule, before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDraft {
    #[serde(default)]
    pub sender_number: Option<String>,

    #[serde(default)]
    pub sender_exact_match: bool,

    #[serde(default)]
    pub message_content: Option<String>,

    pub forward_to_number: String,

    #[serde(default = "default_enabled")]
    pub is_enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for RuleDraft {
    fn default() -> Self {
        Self {
            sender_number: None,
            sender_exact_match: false,
            message_content: None,
            forward_to_number: String::new(),
            is_enabled: true,
        }
    }
}

impl RuleDraft {
    /// An enabled catch-all draft forwarding to `forward_to_number`
    pub fn new(forward_to_number: impl Into<String>) -> Self {
        Self {
            forward_to_number: forward_to_number.into(),
            ..Self::default()
        }
    }

    /// Restrict the draft to a sender
    pub fn from_sender(mut self, sender: impl Into<String>, exact: bool) -> Self {
        self.sender_number = Some(sender.into());
        self.sender_exact_match = exact;
        self
    }

    /// Restrict the draft to messages containing `content`
    pub fn containing(mut self, content: impl Into<String>) -> Self {
        self.message_content = Some(content.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.is_enabled = false;
        self
    }

    /// Trim every text field and turn blank filters into `None`
    pub fn normalized(self) -> Self {
        Self {
            sender_number: trimmed_or_none(self.sender_number),
            sender_exact_match: self.sender_exact_match,
            message_content: trimmed_or_none(self.message_content),
            forward_to_number: self.forward_to_number.trim().to_string(),
            is_enabled: self.is_enabled,
        }
    }

    /// Check the draft can be saved
    ///
    /// The destination must be non-blank and dialable. Filters are free text.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let destination = self.forward_to_number.trim();
        if destination.is_empty() {
            return Err(ValidationError::DestinationRequired);
        }
        if !is_dialable_number(destination) {
            return Err(ValidationError::InvalidFormat {
                field: "forward_to_number".to_string(),
            });
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn trimmed_or_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
