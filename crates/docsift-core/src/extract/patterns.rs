//! Default regex patterns for field extraction.
//!
//! Sources are kept as plain strings so that configuration can replace them;
//! the compiled defaults below are what `new()` constructors use.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{DocsiftError, Result};
use crate::models::config::PatternConfig;

pub const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b";

pub const PHONE_PATTERNS: [&str; 3] = [
    // US style, optional +country prefix, parenthesized or separated groups
    r"(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
    // International: +NN then 10 digits
    r"\+\d{1,3}\s?\d{10}",
    // Bare 10 digits
    r"\d{10}",
];

pub const DATE_PATTERNS: [&str; 3] = [
    // DD/MM/YYYY or MM/DD/YYYY
    r"\b\d{1,2}[/-]\d{1,2}[/-]\d{4}\b",
    // YYYY/MM/DD
    r"\b\d{4}[/-]\d{1,2}[/-]\d{1,2}\b",
    // DD Mon YYYY
    r"(?i)\b\d{1,2}\s+(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+\d{4}\b",
];

pub const IDENTIFIER_PATTERN: &str = r"\b\d{4}\s?\d{4}\s?\d{4}\b";

pub const DATE_OF_BIRTH_PATTERNS: [&str; 2] = [
    r"\b\d{2}[/-]\d{2}[/-]\d{4}\b",
    r"\b\d{2}[/-]\d{2}[/-]\d{2}\b",
];

lazy_static! {
    pub static ref EMAIL: Regex = Regex::new(EMAIL_PATTERN).unwrap();

    pub static ref PHONE: Vec<Regex> = compile_defaults(&PHONE_PATTERNS);

    pub static ref DATE: Vec<Regex> = compile_defaults(&DATE_PATTERNS);

    pub static ref IDENTIFIER: Regex = Regex::new(IDENTIFIER_PATTERN).unwrap();

    pub static ref DATE_OF_BIRTH: Vec<Regex> = compile_defaults(&DATE_OF_BIRTH_PATTERNS);
}

fn compile_defaults(sources: &[&str]) -> Vec<Regex> {
    sources.iter().map(|s| Regex::new(s).unwrap()).collect()
}

/// A compiled set of extraction patterns.
#[derive(Debug, Clone)]
pub struct PatternSet {
    pub email: Regex,
    pub phone: Vec<Regex>,
    pub date: Vec<Regex>,
    pub identifier: Regex,
    pub date_of_birth: Vec<Regex>,
}

impl PatternSet {
    /// Compile patterns supplied as configuration.
    pub fn compile(config: &PatternConfig) -> Result<Self> {
        Ok(Self {
            email: compile_one("email", &config.email)?,
            phone: compile_many("phone", &config.phone)?,
            date: compile_many("date", &config.date)?,
            identifier: compile_one("identifier", &config.identifier)?,
            date_of_birth: compile_many("date_of_birth", &config.date_of_birth)?,
        })
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self {
            email: EMAIL.clone(),
            phone: PHONE.clone(),
            date: DATE.clone(),
            identifier: IDENTIFIER.clone(),
            date_of_birth: DATE_OF_BIRTH.clone(),
        }
    }
}

fn compile_one(field: &str, source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|source| DocsiftError::Pattern {
        field: field.to_string(),
        source,
    })
}

fn compile_many(field: &str, sources: &[String]) -> Result<Vec<Regex>> {
    sources.iter().map(|s| compile_one(field, s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_default_config() {
        let set = PatternSet::compile(&PatternConfig::default()).unwrap();
        assert_eq!(set.phone.len(), 3);
        assert_eq!(set.date.len(), 3);
        assert_eq!(set.date_of_birth.len(), 2);
        assert_eq!(set.email.as_str(), EMAIL.as_str());
    }

    #[test]
    fn test_compile_reports_bad_pattern() {
        let config = PatternConfig {
            phone: vec![r"(\d{3}".to_string()],
            ..PatternConfig::default()
        };

        let err = PatternSet::compile(&config).unwrap_err();
        assert!(matches!(err, DocsiftError::Pattern { ref field, .. } if field == "phone"));
    }
}
