//! Phone number extraction.

use std::collections::HashSet;

use regex::Regex;

use super::patterns::PHONE;
use super::{ExtractionMatch, FieldExtractor};

/// Phone field extractor.
///
/// `extract` only consults the first pattern: the record value is the first
/// match of that pattern, or nothing. `extract_all` runs every pattern in
/// order and drops repeated values, keeping the first occurrence.
pub struct PhoneExtractor {
    patterns: Vec<Regex>,
}

impl PhoneExtractor {
    /// Create an extractor with the default patterns.
    pub fn new() -> Self {
        Self {
            patterns: PHONE.clone(),
        }
    }

    pub fn with_patterns(patterns: Vec<Regex>) -> Self {
        Self { patterns }
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.patterns
            .first()
            .and_then(|pattern| pattern.find(text))
            .map(|m| ExtractionMatch::literal(0, m))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut seen = HashSet::new();
        let mut results = Vec::new();

        for (index, pattern) in self.patterns.iter().enumerate() {
            for m in pattern.find_iter(text) {
                if seen.insert(m.as_str()) {
                    results.push(ExtractionMatch::literal(index, m));
                }
            }
        }

        results
    }
}

/// Extract the record phone number from text.
pub fn extract_phone(text: &str) -> Option<String> {
    PhoneExtractor::new().extract(text).map(|m| m.value)
}

/// Extract all distinct phone numbers from text.
pub fn extract_phones(text: &str) -> Vec<String> {
    PhoneExtractor::new()
        .extract_all(text)
        .into_iter()
        .map(|m| m.value)
        .collect()
}
