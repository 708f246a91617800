//! Person-name inference.

use crate::models::config::DEFAULT_IDENTITY_BOILERPLATE;

use super::split_lines;

/// Picks the first line that looks like a person's name.
///
/// A candidate line is non-empty, has at most `max_tokens` words, contains no
/// digit and no `@`, is longer than `min_length` characters, and contains none
/// of the exclusion phrases (case-insensitive). Only the first `window` lines
/// are considered when a window is set.
#[derive(Debug, Clone)]
pub struct NameInferencer {
    window: Option<usize>,
    exclusions: Vec<String>,
    max_tokens: usize,
    min_length: usize,
}

impl NameInferencer {
    /// Scan every line, no exclusions.
    pub fn new() -> Self {
        Self {
            window: None,
            exclusions: Vec::new(),
            max_tokens: 4,
            min_length: 3,
        }
    }

    /// Resume defaults: the name sits in the first five lines.
    pub fn for_resume() -> Self {
        Self::new().with_window(5)
    }

    /// Identity-card defaults: whole document, issuer boilerplate excluded.
    pub fn for_identity() -> Self {
        Self::new().with_exclusions(DEFAULT_IDENTITY_BOILERPLATE.iter().map(|s| s.to_string()))
    }

    pub fn with_window(mut self, lines: usize) -> Self {
        self.window = Some(lines);
        self
    }

    pub fn with_exclusions<I, S>(mut self, exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclusions = exclusions
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Return the first qualifying line, or an empty string.
    pub fn infer(&self, text: &str) -> String {
        let lines = split_lines(text);
        let window = self.window.unwrap_or(lines.len());

        lines
            .into_iter()
            .take(window)
            .find(|line| self.is_candidate(line))
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// Whether a trimmed line qualifies as a name.
    pub fn is_candidate(&self, line: &str) -> bool {
        if line.is_empty() || line.contains('@') {
            return false;
        }
        if line.split_whitespace().count() > self.max_tokens {
            return false;
        }
        if line.chars().any(char::is_numeric) {
            return false;
        }
        if line.chars().count() <= self.min_length {
            return false;
        }

        let lower = line.to_lowercase();
        !self.exclusions.iter().any(|phrase| lower.contains(phrase))
    }
}

impl Default for NameInferencer {
    fn default() -> Self {
        Self::new()
    }
}
