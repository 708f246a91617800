//! Rule-based field extractors for recognized text.
//!
//! Each extractor applies an ordered list of regular expressions. Patterns
//! are deliberately loose: noisy OCR output favours recall, and callers treat
//! every value as a suggestion. Zero matches is a normal outcome.

pub mod dates;
pub mod email;
pub mod identifier;
pub mod patterns;
pub mod phone;
pub mod skills;

pub use dates::{DateExtractor, extract_dates, parse_date_literal};
pub use email::{EmailExtractor, extract_email, extract_emails};
pub use identifier::{IdentifierExtractor, extract_identifier, is_valid_identifier};
pub use patterns::PatternSet;
pub use phone::{PhoneExtractor, extract_phone, extract_phones};
pub use skills::SkillMatcher;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the record value for this field.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A single pattern match.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Index of the pattern (within the extractor's ordered list) that matched.
    pub pattern: usize,
    /// Byte span in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            pattern: 0,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }

    pub fn with_pattern(mut self, pattern: usize) -> Self {
        self.pattern = pattern;
        self
    }
}

impl ExtractionMatch<String> {
    /// The whole match, verbatim. Capture groups never narrow the value.
    pub(crate) fn literal(pattern: usize, m: regex::Match<'_>) -> Self {
        Self::new(m.as_str().to_string(), m.as_str())
            .with_position(m.start(), m.end())
            .with_pattern(pattern)
    }
}
