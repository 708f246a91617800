//! Date extraction.

use chrono::NaiveDate;
use regex::Regex;

use super::patterns::DATE;
use super::{ExtractionMatch, FieldExtractor};

const FULL_YEAR_FORMATS: [&str; 7] = [
    "%d/%m/%Y", "%d-%m-%Y", "%m/%d/%Y", "%m-%d-%Y", "%Y/%m/%d", "%Y-%m-%d", "%d %b %Y",
];

const SHORT_YEAR_FORMATS: [&str; 4] = ["%d/%m/%y", "%d-%m-%y", "%m/%d/%y", "%m-%d-%y"];

/// Date field extractor.
///
/// Matches are literal strings; no calendar validation happens here.
/// `extract_all` concatenates the matches of each pattern in pattern order
/// without removing duplicates across patterns.
pub struct DateExtractor {
    patterns: Vec<Regex>,
}

impl DateExtractor {
    /// Create an extractor with the default patterns.
    pub fn new() -> Self {
        Self {
            patterns: DATE.clone(),
        }
    }

    pub fn with_patterns(patterns: Vec<Regex>) -> Self {
        Self { patterns }
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.patterns.iter().enumerate().find_map(|(index, pattern)| {
            pattern
                .find(text)
                .map(|m| ExtractionMatch::literal(index, m))
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.patterns
            .iter()
            .enumerate()
            .flat_map(|(index, pattern)| {
                pattern
                    .find_iter(text)
                    .map(move |m| ExtractionMatch::literal(index, m))
            })
            .collect()
    }
}

/// Extract all date literals from text.
pub fn extract_dates(text: &str) -> Vec<String> {
    DateExtractor::new()
        .extract_all(text)
        .into_iter()
        .map(|m| m.value)
        .collect()
}

/// Interpret a date literal as a calendar date.
///
/// Day-first readings win over month-first ones. Two-digit years follow
/// chrono's pivot (70-99 => 19xx, otherwise 20xx). Returns `None` for
/// literals that name no real date, such as `31/02/2020`.
pub fn parse_date_literal(literal: &str) -> Option<NaiveDate> {
    let compact = literal.split_whitespace().collect::<Vec<_>>().join(" ");
    let full_year = compact
        .split(|c: char| !c.is_ascii_digit())
        .any(|run| run.len() == 4);

    let formats: &[&str] = if full_year {
        &FULL_YEAR_FORMATS
    } else {
        &SHORT_YEAR_FORMATS
    };

    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&compact, format).ok())
}
