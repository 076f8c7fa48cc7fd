//! Text redaction for PII/PHI
//!
//! Recognized values are replaced by placeholders that keep the shape of
//! the original (segment count and separators) but none of its content.

pub mod redactor;

use lazy_static::lazy_static;

pub use redactor::{
    DEFAULT_PATTERNS, RedactionInfo, RedactionPattern, Redactor, SeparatedText, scrub_text_all,
};

lazy_static! {
    static ref DEFAULT_REDACTOR: Redactor = Redactor::new();
}

/// Scrub `text` with the built-in pattern table
pub fn scrub(text: &str) -> String {
    DEFAULT_REDACTOR.scrub(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrub_all_together() {
        let text = "John's email is johnsmith@example.com and his phone number is 555-123-4567. \
                    His credit card number is 4534-5678-9012-3456 and he was born on 01/01/1980.";

        assert_eq!(
            scrub(text),
            "John's email is ***@***.*** and his phone number is ***-***-****. \
             His credit card number is ****-****-****-**** and he was born on **/**/****."
        );
    }

    #[test]
    fn test_default_pattern_order() {
        let names: Vec<&str> = DEFAULT_PATTERNS.iter().map(|(name, _, _)| *name).collect();
        assert_eq!(names, vec!["EMAIL", "PHONE_NUMBER", "CREDIT_CARD", "DATE"]);
    }

    #[test]
    fn test_placeholder_lengths() {
        let lengths: Vec<usize> = DEFAULT_PATTERNS.iter().map(|(_, _, r)| r.len()).collect();
        assert_eq!(lengths, vec![11, 12, 19, 10]);
    }
}
