//! Rule matching
//!
//! A rule matches a message when its sender filter and its content filter
//! both accept it. Blank filters accept everything. Sender comparison is
//! case-sensitive and performs no phone number normalization, content
//! comparison is case-insensitive containment.

use crate::domain::entities::ForwardingRule;

/// Decide whether `rule` accepts a message from `sender_address` with `body`
///
/// Pure and deterministic. The rule's enabled flag is not consulted here.
pub fn matches(rule: &ForwardingRule, sender_address: &str, body: &str) -> bool {
    if let Some(sender) = rule.sender_filter() {
        let accepted = if rule.sender_exact_match {
            sender_address == sender
        } else {
            sender_address.contains(sender)
        };
        if !accepted {
            return false;
        }
    }

    if let Some(content) = rule.content_filter() {
        if !body.to_lowercase().contains(&content.to_lowercase()) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RuleDraft;

    fn rule(draft: RuleDraft) -> ForwardingRule {
        ForwardingRule::from_draft(1, draft)
    }

    #[test]
    fn test_catch_all_matches_anything() {
        let rule = rule(RuleDraft::new("+1000"));
        assert!(matches(&rule, "+15551234567", "hello"));
        assert!(matches(&rule, "", ""));
    }

    #[test]
    fn test_exact_sender() {
        let rule = rule(RuleDraft::new("+1000").from_sender("+15551234567", true));
        assert!(matches(&rule, "+15551234567", "anything"));
        assert!(!matches(&rule, "+155512345678", "anything"));
        assert!(!matches(&rule, "15551234567", "anything"));
    }

    #[test]
    fn test_partial_sender_is_substring() {
        let rule = rule(RuleDraft::new("+1000").from_sender("BANK", false));
        assert!(matches(&rule, "MYBANK-ALERTS", "x"));
        assert!(matches(&rule, "BANK", "x"));
        assert!(!matches(&rule, "my-bank", "x"));
    }

    #[test]
    fn test_partial_sender_does_not_normalize() {
        let rule = rule(RuleDraft::new("+1000").from_sender("555-1234", false));
        assert!(!matches(&rule, "+15551234", "x"));
    }

    #[test]
    fn test_content_is_case_insensitive() {
        let rule = rule(RuleDraft::new("+1000").containing("OTP"));
        assert!(matches(&rule, "x", "Your otp is 1234"));
        assert!(matches(&rule, "x", "OTP: 9"));
        assert!(!matches(&rule, "x", "Your code is 1234"));
    }

    #[test]
    fn test_content_handles_non_ascii() {
        let rule = rule(RuleDraft::new("+1000").containing("ÜBERWEISUNG"));
        assert!(matches(&rule, "x", "Ihre überweisung ist da"));
    }

    #[test]
    fn test_both_filters_must_match() {
        let rule = rule(
            RuleDraft::new("+1000")
                .from_sender("+15551234567", true)
                .containing("code"),
        );
        assert!(matches(&rule, "+15551234567", "Your CODE"));
        assert!(!matches(&rule, "+15551234567", "hello"));
        assert!(!matches(&rule, "+19998887777", "Your code"));
    }

    #[test]
    fn test_blank_filters_are_ignored() {
        let rule = ForwardingRule::from_draft(
            1,
            RuleDraft {
                sender_number: Some("   ".to_string()),
                sender_exact_match: true,
                message_content: Some(" ".to_string()),
                ..RuleDraft::new("+1000")
            },
        );
        assert!(matches(&rule, "anyone", "anything"));
    }

    #[test]
    fn test_enabled_flag_not_consulted() {
        let rule = rule(RuleDraft::new("+1000").disabled());
        assert!(matches(&rule, "x", "y"));
    }
}
