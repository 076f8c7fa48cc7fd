//! PII/PHI redaction engine

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionInfo {
    pub redaction_type: String,
    pub count: usize,
}

/// A match rule paired with the placeholder that replaces every match
#[derive(Debug, Clone)]
pub struct RedactionPattern {
    name: String,
    regex: Regex,
    replacement: String,
}

impl RedactionPattern {
    pub fn new(name: &str, pattern: &str, replacement: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.to_string(),
            regex: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Built-in table: (category, match rule, placeholder), applied top to bottom.
pub const DEFAULT_PATTERNS: &[(&str, &str, &str)] = &[
    (
        "EMAIL",
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
        "***@***.***",
    ),
    ("PHONE_NUMBER", r"\b[0-9]{3}[ -]?[0-9]{3}[ -]?[0-9]{4}\b", "***-***-****"),
    (
        "CREDIT_CARD",
        r"\b[0-9]{4}-[0-9]{4}-[0-9]{4}-[0-9]{4}\b",
        "****-****-****-****",
    ),
    ("DATE", r"\b[0-9]{2}/[0-9]{2}/[0-9]{4}\b", "**/**/****"),
];

/// How keyboard-action text is laid out: characters joined by `separator`,
/// except named keys wrapped in `name_prefix`/`name_suffix` (e.g. `<ctrl>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparatedText {
    pub separator: String,
    pub name_prefix: String,
    pub name_suffix: String,
}

impl Default for SeparatedText {
    fn default() -> Self {
        Self {
            separator: "-".to_string(),
            name_prefix: "<".to_string(),
            name_suffix: ">".to_string(),
        }
    }
}

/// Ordered redaction pipeline
///
/// Each pattern is a single global substitution over the output of the
/// previous one, so a span consumed by an earlier pattern is no longer
/// visible to later ones.
#[derive(Debug, Clone)]
pub struct Redactor {
    patterns: Vec<RedactionPattern>,
}

impl Redactor {
    pub fn new() -> Self {
        let patterns = DEFAULT_PATTERNS
            .iter()
            .map(|(name, pattern, replacement)| {
                RedactionPattern::new(name, pattern, replacement)
                    .expect("built-in redaction pattern must compile")
            })
            .collect();

        Self { patterns }
    }

    /// Build a pipeline from an explicit, ordered pattern list
    pub fn with_patterns(patterns: Vec<RedactionPattern>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[RedactionPattern] {
        &self.patterns
    }

    /// Replace every recognized PII/PHI span with its placeholder
    pub fn scrub(&self, text: &str) -> String {
        self.redact(text).0
    }

    /// Scrub and report how many spans each category replaced
    pub fn redact(&self, text: &str) -> (String, Vec<RedactionInfo>) {
        let mut result = text.to_string();
        let mut redactions = Vec::new();

        for pattern in &self.patterns {
            let count = pattern.regex.find_iter(&result).count();

            if count > 0 {
                result = pattern
                    .regex
                    .replace_all(&result, NoExpand(&pattern.replacement))
                    .into_owned();

                tracing::debug!(category = %pattern.name, count, "redacted");
                redactions.push(RedactionInfo {
                    redaction_type: pattern.name.clone(),
                    count,
                });
            }
        }

        (result, redactions)
    }

    /// Scrub keyboard-action text such as `j-o-e-@-x-.-c-o-m`
    ///
    /// The separator is stripped before matching and re-inserted between
    /// every character of the scrubbed result. Named keys are scrubbed as-is.
    pub fn scrub_separated(&self, text: &str, layout: &SeparatedText) -> String {
        self.redact_separated(text, layout).0
    }

    /// `scrub_separated` with the per-category report of the joined text
    pub fn redact_separated(
        &self,
        text: &str,
        layout: &SeparatedText,
    ) -> (String, Vec<RedactionInfo>) {
        if layout.separator.is_empty()
            || text.starts_with(&layout.name_prefix)
            || text.ends_with(&layout.name_suffix)
        {
            return self.redact(text);
        }

        let joined: String = text.split(layout.separator.as_str()).collect();
        let (scrubbed, redactions) = self.redact(&joined);

        let rejoined = scrubbed
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(&layout.separator);

        (rejoined, redactions)
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new()
    }
}

/// Mask every character of `text`, keeping only its length
pub fn scrub_text_all(text: &str, mask: char) -> String {
    text.chars().map(|_| mask).collect()
}
