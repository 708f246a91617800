//! Email address extraction.

use regex::Regex;

use super::patterns::EMAIL;
use super::{ExtractionMatch, FieldExtractor};

/// Email field extractor.
pub struct EmailExtractor {
    pattern: Regex,
}

impl EmailExtractor {
    /// Create an extractor with the default pattern.
    pub fn new() -> Self {
        Self {
            pattern: EMAIL.clone(),
        }
    }

    pub fn with_pattern(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.pattern
            .find(text)
            .map(|m| ExtractionMatch::literal(0, m))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.pattern
            .find_iter(text)
            .map(|m| ExtractionMatch::literal(0, m))
            .collect()
    }
}

/// Extract the first email address from text.
pub fn extract_email(text: &str) -> Option<String> {
    EmailExtractor::new().extract(text).map(|m| m.value)
}

/// Extract every email address from text, in text order.
pub fn extract_emails(text: &str) -> Vec<String> {
    EmailExtractor::new()
        .extract_all(text)
        .into_iter()
        .map(|m| m.value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email() {
        let text = "Jane Doe\nContact: jane.doe+cv@example.co.uk, Berlin";
        assert_eq!(extract_email(text), Some("jane.doe+cv@example.co.uk".to_string()));
    }

    #[test]
    fn test_extract_emails_in_order() {
        let text = "work: a.b@corp.io home: ab_99@mail.com";
        assert_eq!(extract_emails(text), vec!["a.b@corp.io", "ab_99@mail.com"]);
    }

    #[test]
    fn test_extract_email_requires_tld() {
        assert_eq!(extract_email("user@localhost"), None);
        assert!(extract_emails("").is_empty());
    }

    #[test]
    fn test_match_position() {
        let m = EmailExtractor::new().extract("mail x@y.org now").unwrap();
        assert_eq!(m.position, Some((5, 12)));
        assert_eq!(m.source, "x@y.org");
    }
}
