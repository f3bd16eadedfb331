//! SMS segmentation
//!
//! Texts using only the GSM 7-bit alphabet fit 160 characters in a single
//! segment and 153 per segment once concatenated. Anything else is sent as
//! UCS-2, which fits 70 code units alone and 67 per concatenated segment.
//! Characters from the GSM extension table take two septets (escape plus
//! code). Splits always fall on character boundaries.

/// GSM 7-bit single segment capacity
pub const GSM7_SINGLE_SEGMENT: usize = 160;
/// GSM 7-bit concatenated segment capacity
pub const GSM7_MULTI_SEGMENT: usize = 153;
/// UCS-2 single segment capacity in UTF-16 code units
pub const UCS2_SINGLE_SEGMENT: usize = 70;
/// UCS-2 concatenated segment capacity in UTF-16 code units
pub const UCS2_MULTI_SEGMENT: usize = 67;

// GSM 03.38 basic character set, one septet each
const GSM7_BASIC: &str = "@£$¥èéùìòÇ\nØø\rÅåΔ_ΦΓΛΩΠΨΣΘΞÆæßÉ !\"#¤%&'()*+,-./0123456789:;<=>?\
¡ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÑÜ§¿abcdefghijklmnopqrstuvwxyzäöñüà";

// GSM 03.38 extension table, escape septet plus code
const GSM7_EXTENSION: &str = "\u{0C}^{}\\[~]|€";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Gsm7,
    Ucs2,
}

impl Encoding {
    /// (single segment, concatenated segment) capacity
    pub fn limits(self) -> (usize, usize) {
        match self {
            Encoding::Gsm7 => (GSM7_SINGLE_SEGMENT, GSM7_MULTI_SEGMENT),
            Encoding::Ucs2 => (UCS2_SINGLE_SEGMENT, UCS2_MULTI_SEGMENT),
        }
    }

    /// Septets (GSM-7) or UTF-16 code units (UCS-2) taken by `c`
    pub fn width(self, c: char) -> usize {
        match self {
            Encoding::Gsm7 if GSM7_EXTENSION.contains(c) => 2,
            Encoding::Gsm7 => 1,
            Encoding::Ucs2 => c.len_utf16(),
        }
    }
}

/// Encoding a carrier would pick for `text`
pub fn detect_encoding(text: &str) -> Encoding {
    if text
        .chars()
        .all(|c| GSM7_BASIC.contains(c) || GSM7_EXTENSION.contains(c))
    {
        Encoding::Gsm7
    } else {
        Encoding::Ucs2
    }
}

/// Split `text` into ordered SMS parts
///
/// Returns a single part when the text fits one segment and no parts for
/// empty text. Concatenating the parts yields the original text.
pub fn split_message(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let encoding = detect_encoding(text);
    let (single, multi) = encoding.limits();

    let total: usize = text.chars().map(|c| encoding.width(c)).sum();
    if total <= single {
        return vec![text.to_string()];
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for c in text.chars() {
        let width = encoding.width(c);
        if used + width > multi {
            parts.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(c);
        used += width;
    }
    if !current.is_empty() {
        parts.push(current);
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_encoding() {
        assert_eq!(detect_encoding("Hello, your code is 1234."), Encoding::Gsm7);
        assert_eq!(detect_encoding("Prix: 5€ [promo]"), Encoding::Gsm7);
        assert_eq!(detect_encoding("验证码 1234"), Encoding::Ucs2);
        assert_eq!(detect_encoding("ok 👍"), Encoding::Ucs2);
    }

    #[test]
    fn test_short_text_is_single_part() {
        let text = "a".repeat(160);
        assert_eq!(split_message(&text), vec![text]);
        assert!(split_message("").is_empty());
    }

    #[test]
    fn test_gsm_split_sizes() {
        let text = "x".repeat(250);
        let parts = split_message(&text);

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].chars().count(), 153);
        assert_eq!(parts[1].chars().count(), 97);
        assert_eq!(parts.concat(), text);
    }

    #[test]
    fn test_ucs2_split_sizes() {
        let text = "码".repeat(100);
        let parts = split_message(&text);

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].chars().count(), 67);
        assert_eq!(parts.concat(), text);
    }

    fn septets(text: &str) -> usize {
        text.chars().map(|c| Encoding::Gsm7.width(c)).sum()
    }

    #[test]
    fn test_extension_characters_count_double() {
        assert_eq!(septets("a[b]€"), 8);

        // 200 septets no longer fit one segment
        let brackets = "[".repeat(100);
        let parts = split_message(&brackets);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].chars().count(), 76);
        assert_eq!(parts.concat(), brackets);
    }

    #[test]
    fn test_extension_heavy_parts_respect_segment_capacity() {
        let euros = "€".repeat(200);
        let parts = split_message(&euros);

        assert!(parts.iter().all(|p| septets(p) <= GSM7_MULTI_SEGMENT));
        assert_eq!(parts.len(), 3);
        assert_eq!(parts.concat(), euros);

        // an escaped character never straddles two parts
        let mixed = format!("{}{{{}", "a".repeat(152), "a".repeat(10));
        let parts = split_message(&mixed);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].chars().count(), 152);
    }

    #[test]
    fn test_surrogate_pairs_not_split() {
        let text = "😀".repeat(40);
        let parts = split_message(&text);

        // 80 code units, 33 emoji per 67-unit segment
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].chars().count(), 33);
        assert_eq!(parts.concat(), text);
    }
}
