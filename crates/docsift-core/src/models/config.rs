//! Configuration structures for the extraction pipeline.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DocsiftError, Result};
use crate::extract::patterns::{
    DATE_OF_BIRTH_PATTERNS, DATE_PATTERNS, EMAIL_PATTERN, IDENTIFIER_PATTERN, PHONE_PATTERNS,
};

/// Skill keywords matched in resumes, in reporting order.
pub const DEFAULT_SKILL_KEYWORDS: [&str; 18] = [
    "python",
    "java",
    "javascript",
    "react",
    "angular",
    "node.js",
    "sql",
    "mongodb",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "html",
    "css",
    "machine learning",
    "data science",
    "tensorflow",
    "pytorch",
];

/// Lines containing any of these are never taken as a name on identity cards.
pub const DEFAULT_IDENTITY_BOILERPLATE: [&str; 2] = ["government", "india"];

/// Main configuration for the docsift pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsiftConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Regular expressions used by the pattern extractors.
    pub patterns: PatternConfig,

    /// Detection aggregation configuration.
    pub confidence: ConfidenceConfig,
}

/// Heuristic and keyword configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Keyword table for resume skills.
    pub skill_keywords: Vec<String>,

    /// Number of leading lines searched for a name on resumes.
    pub resume_name_window: usize,

    /// Case-insensitive phrases that disqualify a name line on identity cards.
    pub identity_boilerplate: Vec<String>,

    /// Maximum whitespace-separated tokens in a name line.
    pub max_name_tokens: usize,

    /// A name line must be longer than this many characters.
    pub min_name_length: usize,

    /// Leading glyphs that mark a bullet key point in notes.
    pub key_point_bullets: Vec<char>,

    /// Run the text normalizer before email and identifier extraction.
    pub normalize_before_extraction: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            skill_keywords: DEFAULT_SKILL_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            resume_name_window: 5,
            identity_boilerplate: DEFAULT_IDENTITY_BOILERPLATE
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_name_tokens: 4,
            min_name_length: 3,
            key_point_bullets: vec!['•', '-', '*'],
            normalize_before_extraction: false,
        }
    }
}

/// Pattern sources, tried in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub email: String,
    pub phone: Vec<String>,
    pub date: Vec<String>,
    pub identifier: String,
    pub date_of_birth: Vec<String>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            email: EMAIL_PATTERN.to_string(),
            phone: PHONE_PATTERNS.iter().map(|s| s.to_string()).collect(),
            date: DATE_PATTERNS.iter().map(|s| s.to_string()).collect(),
            identifier: IDENTIFIER_PATTERN.to_string(),
            date_of_birth: DATE_OF_BIRTH_PATTERNS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Detection aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Detections below this confidence are discarded (0.0 - 1.0).
    pub min_confidence: f64,

    /// Join detection texts in reading order instead of input order.
    pub reading_order: bool,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.5,
            reading_order: false,
        }
    }
}

impl DocsiftConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check values that deserialization alone cannot rule out.
    pub fn validate(&self) -> Result<()> {
        check_min_confidence(self.confidence.min_confidence)
    }
}

/// Reject floors outside [0, 1], NaN included.
pub(crate) fn check_min_confidence(floor: f64) -> Result<()> {
    if (0.0..=1.0).contains(&floor) {
        Ok(())
    } else {
        Err(DocsiftError::Config(format!(
            "min_confidence must be between 0 and 1, got {floor}"
        )))
    }
}
