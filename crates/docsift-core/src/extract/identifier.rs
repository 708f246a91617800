//! 12-digit identity number extraction and validation.

use regex::Regex;

use super::patterns::IDENTIFIER;
use super::{ExtractionMatch, FieldExtractor};

/// Identity number extractor. Values are stored with whitespace removed.
pub struct IdentifierExtractor {
    pattern: Regex,
}

impl IdentifierExtractor {
    /// Create an extractor with the default pattern.
    pub fn new() -> Self {
        Self {
            pattern: IDENTIFIER.clone(),
        }
    }

    pub fn with_pattern(pattern: Regex) -> Self {
        Self { pattern }
    }

    fn to_match(m: regex::Match<'_>) -> ExtractionMatch<String> {
        ExtractionMatch::new(strip_whitespace(m.as_str()), m.as_str())
            .with_position(m.start(), m.end())
    }
}

impl Default for IdentifierExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for IdentifierExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.pattern.find(text).map(Self::to_match)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.pattern.find_iter(text).map(Self::to_match).collect()
    }
}

/// Extract the first identity number from text, digits only.
pub fn extract_identifier(text: &str) -> Option<String> {
    IdentifierExtractor::new().extract(text).map(|m| m.value)
}

/// Check that a value is a 12-digit identity number, ignoring whitespace.
pub fn is_valid_identifier(value: &str) -> bool {
    let digits = strip_whitespace(value);
    digits.len() == 12 && digits.chars().all(|c| c.is_ascii_digit())
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}
