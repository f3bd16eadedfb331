//! Unit tests for forwarding rule entity

use crate::domain::entities::forwarding_rule::{ForwardingRule, RuleDraft};
use crate::errors::ValidationError;

#[test]
fn test_from_draft_keeps_fields() {
    let draft = RuleDraft::new("+15550001111")
        .from_sender("+15551234567", true)
        .containing("OTP");
    let rule = ForwardingRule::from_draft(7, draft);

    assert_eq!(rule.id(), 7);
    assert_eq!(rule.sender_number.as_deref(), Some("+15551234567"));
    assert!(rule.sender_exact_match);
    assert_eq!(rule.message_content.as_deref(), Some("OTP"));
    assert_eq!(rule.forward_to_number, "+15550001111");
    assert!(rule.is_enabled);
    assert_eq!(rule.created_at, rule.updated_at);
}

#[test]
fn test_draft_defaults_to_enabled_catch_all() {
    let draft = RuleDraft::new("+1000");
    assert!(draft.is_enabled);
    assert!(draft.sender_number.is_none());
    assert!(draft.message_content.is_none());
    assert!(!draft.sender_exact_match);
}

#[test]
fn test_draft_deserialize_defaults() {
    let draft: RuleDraft = serde_json::from_str(r#"{"forward_to_number": "+1000"}"#).unwrap();
    assert!(draft.is_enabled);
    assert!(draft.sender_number.is_none());
}

#[test]
fn test_normalized_trims_and_blanks_to_none() {
    let draft = RuleDraft {
        sender_number: Some("  BANK  ".to_string()),
        sender_exact_match: false,
        message_content: Some("   ".to_string()),
        forward_to_number: "  +15550001111 ".to_string(),
        is_enabled: true,
    }
    .normalized();

    assert_eq!(draft.sender_number.as_deref(), Some("BANK"));
    assert!(draft.message_content.is_none());
    assert_eq!(draft.forward_to_number, "+15550001111");
}

#[test]
fn test_validate_requires_destination() {
    assert_eq!(
        RuleDraft::new("").validate(),
        Err(ValidationError::DestinationRequired)
    );
    assert_eq!(
        RuleDraft::new("   ").validate(),
        Err(ValidationError::DestinationRequired)
    );
}

#[test]
fn test_validate_rejects_undialable_destination() {
    let result = RuleDraft::new("my phone").validate();
    assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
}

#[test]
fn test_validate_accepts_free_text_filters() {
    let draft = RuleDraft::new("+1 (555) 000-1111")
        .from_sender("ACME", false)
        .containing("any text at all");
    assert!(draft.validate().is_ok());
}

#[test]
fn test_blank_filters_count_as_absent() {
    let rule = ForwardingRule::from_draft(
        1,
        RuleDraft {
            sender_number: Some("  ".to_string()),
            message_content: Some(String::new()),
            ..RuleDraft::new("+1000")
        },
    );

    assert!(rule.sender_filter().is_none());
    assert!(rule.content_filter().is_none());
    assert!(rule.is_catch_all());
}

#[test]
fn test_display_strings() {
    let exact = ForwardingRule::from_draft(1, RuleDraft::new("+1000").from_sender("+1555", true));
    let partial = ForwardingRule::from_draft(2, RuleDraft::new("+1000").from_sender("BANK", false));
    let any = ForwardingRule::from_draft(3, RuleDraft::new("+1000").containing("code"));

    assert_eq!(exact.sender_display(), "+1555 (Exact)");
    assert_eq!(partial.sender_display(), "BANK (Partial)");
    assert_eq!(any.sender_display(), "Any sender");
    assert_eq!(exact.content_display(), "Any content");
    assert_eq!(any.content_display(), "code");
    assert_eq!(any.to_string(), "#3 [Any sender | code] -> +1000");
}

#[test]
fn test_apply_keeps_identity() {
    let mut rule = ForwardingRule::from_draft(5, RuleDraft::new("+1000"));
    let created_at = rule.created_at;

    rule.apply(RuleDraft::new("+2000").from_sender("BANK", false).disabled());

    assert_eq!(rule.id(), 5);
    assert_eq!(rule.created_at, created_at);
    assert_eq!(rule.forward_to_number, "+2000");
    assert_eq!(rule.sender_number.as_deref(), Some("BANK"));
    assert!(!rule.is_enabled);
    assert!(rule.updated_at >= created_at);
}

#[test]
fn test_set_enabled_and_to_draft() {
    let mut rule = ForwardingRule::from_draft(9, RuleDraft::new("+1000").containing("otp"));
    rule.set_enabled(false);

    let draft = rule.to_draft();
    assert!(!draft.is_enabled);
    assert_eq!(draft.message_content.as_deref(), Some("otp"));
    assert_eq!(draft.forward_to_number, "+1000");
}
