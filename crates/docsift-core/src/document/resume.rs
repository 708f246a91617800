//! Resume parsing.

use tracing::{debug, info};

use crate::error::Result;
use crate::extract::{EmailExtractor, FieldExtractor, PatternSet, PhoneExtractor, SkillMatcher};
use crate::infer::NameInferencer;
use crate::models::config::{DocsiftConfig, ExtractionConfig};
use crate::models::records::ResumeRecord;

use super::{DocumentParser, pattern_input};

/// Resume parser: contact details, name and skills.
pub struct ResumeParser {
    email: EmailExtractor,
    phone: PhoneExtractor,
    name: NameInferencer,
    skills: SkillMatcher,
    normalize: bool,
}

impl ResumeParser {
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
            email: EmailExtractor::with_pattern(patterns.email.clone()),
            phone: PhoneExtractor::with_patterns(patterns.phone.clone()),
            name: NameInferencer::new()
                .with_window(extraction.resume_name_window)
                .with_max_tokens(extraction.max_name_tokens)
                .with_min_length(extraction.min_name_length),
            skills: SkillMatcher::new(extraction.skill_keywords.clone()),
            normalize: extraction.normalize_before_extraction,
        }
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for ResumeParser {
    type Record = ResumeRecord;

    fn parse(&self, text: &str) -> ResumeRecord {
        info!("Parsing resume from {} characters of text", text.len());

        let email_text = pattern_input(text, self.normalize);

        let record = ResumeRecord {
            name: self.name.infer(text),
            email: self
                .email
                .extract(&email_text)
                .map(|m| m.value)
                .unwrap_or_default(),
            phone: self.phone.extract(text).map(|m| m.value).unwrap_or_default(),
            skills: self.skills.find(text),
        };

        debug!(
            "Resume fields: name={:?} email={:?} phone={:?} skills={}",
            record.name,
            record.email,
            record.phone,
            record.skills.len()
        );

        record
    }
}
