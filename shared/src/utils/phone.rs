//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static E164_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{1,14}$").expect("E.164 pattern is valid")
});

// Characters a user may type in a dialable number
static DIALABLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9 ()\-]*[0-9][0-9 ()\-]*$").expect("dialable pattern is valid")
});

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is in international E.164 format
pub fn is_valid_e164(phone: &str) -> bool {
    E164_REGEX.is_match(&normalize_phone_number(phone))
}

/// Check that a destination looks dialable: digits with optional `+`, spaces, dashes, parentheses
pub fn is_dialable_number(phone: &str) -> bool {
    DIALABLE_REGEX.is_match(phone.trim())
}

/// Mask a phone number for logging, keeping only the last 4 characters visible
///
/// Alphanumeric sender IDs are masked the same way.
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    let visible = 4;

    if chars.len() <= visible {
        return "*".repeat(chars.len());
    }

    let masked_count = chars.len() - visible;
    let last: String = chars[masked_count..].iter().collect();

    if chars[0] == '+' {
        format!("+{}{}", "*".repeat(masked_count - 1), last)
    } else {
        format!("{}{}", "*".repeat(masked_count), last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("555-123-4567"), "5551234567");
        assert_eq!(normalize_phone_number("+1 (555) 123 4567"), "+15551234567");
    }

    #[test]
    fn test_is_valid_e164() {
        assert!(is_valid_e164("+15551234567"));
        assert!(is_valid_e164("+1 555 123 4567"));
        assert!(!is_valid_e164("5551234567"));
        assert!(!is_valid_e164("+0123456789"));
    }

    #[test]
    fn test_is_dialable_number() {
        assert!(is_dialable_number("+15551234567"));
        assert!(is_dialable_number("+1000"));
        assert!(is_dialable_number("(555) 123-4567"));
        assert!(!is_dialable_number(""));
        assert!(!is_dialable_number("+"));
        assert!(!is_dialable_number("call me"));
        assert!(!is_dialable_number("+1555abc"));
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+1234567890"), "+******7890");
        assert_eq!(mask_phone_number("1234567890"), "******7890");
        assert_eq!(mask_phone_number("1234"), "****");
        assert_eq!(mask_phone_number("ACME-BANK"), "*****BANK");
    }
}
