//! Identity-card parsing.

use tracing::{debug, info};

use crate::error::Result;
use crate::extract::{DateExtractor, FieldExtractor, IdentifierExtractor, PatternSet};
use crate::infer::{NameInferencer, infer_gender};
use crate::models::config::{DocsiftConfig, ExtractionConfig};
use crate::models::records::IdentityRecord;

use super::{DocumentParser, pattern_input};

/// Identity-card parser: number, date of birth, gender and name.
pub struct IdentityParser {
    identifier: IdentifierExtractor,
    date_of_birth: DateExtractor,
    name: NameInferencer,
    normalize: bool,
}

impl IdentityParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::with_patterns(&PatternSet::default(), &ExtractionConfig::default())
    }

    /// Create a parser from configuration, compiling its patterns.
    pub fn from_config(config: &DocsiftConfig) -> Result<Self> {
        let patterns = PatternSet::compile(&config.patterns)?;
        Ok(Self::with_patterns(&patterns, &config.extraction))
    }

    /// Create a parser from already compiled patterns.
    pub fn with_patterns(patterns: &PatternSet, extraction: &ExtractionConfig) -> Self {
        Self {
            identifier: IdentifierExtractor::with_pattern(patterns.identifier.clone()),
            date_of_birth: DateExtractor::with_patterns(patterns.date_of_birth.clone()),
            name: NameInferencer::new()
                .with_exclusions(&extraction.identity_boilerplate)
                .with_max_tokens(extraction.max_name_tokens)
                .with_min_length(extraction.min_name_length),
            normalize: extraction.normalize_before_extraction,
        }
    }
}

impl Default for IdentityParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for IdentityParser {
    type Record = IdentityRecord;

    fn parse(&self, text: &str) -> IdentityRecord {
        info!("Parsing identity document from {} characters of text", text.len());

        let number_text = pattern_input(text, self.normalize);

        let record = IdentityRecord {
            name: self.name.infer(text),
            identifier_number: self
                .identifier
                .extract(&number_text)
                .map(|m| m.value)
                .unwrap_or_default(),
            date_of_birth: self
                .date_of_birth
                .extract(text)
                .map(|m| m.value)
                .unwrap_or_default(),
            gender: infer_gender(text),
        };

        debug!(
            "Identity fields: name={:?} number={:?} dob={:?} gender={:?}",
            record.name, record.identifier_number, record.date_of_birth, record.gender
        );

        record
    }
}
