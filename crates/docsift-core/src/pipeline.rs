//! End-to-end processing of recognized input into a record and quality report.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::confidence::{
    ConfidenceReport, DEFAULT_MIN_CONFIDENCE, Detection, aggregate, join_text,
    sort_by_reading_order,
};
use crate::document::{DocumentParser, IdentityParser, NotesParser, ResumeParser};
use crate::error::Result;
use crate::extract::{PatternSet, is_valid_identifier, parse_date_literal};
use crate::models::config::{DocsiftConfig, check_min_confidence};
use crate::models::records::{
    DocumentKind, IdentityRecord, NotesRecord, ParsedDocument, ResumeRecord,
};

/// Output of a recognition engine.
#[derive(Debug, Clone)]
pub enum RecognizedInput {
    /// Whole-document text.
    Text(String),
    /// Token or region level detections.
    Detections(Vec<Detection>),
}

/// Result of processing one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedDocument {
    /// Parsed record.
    pub record: ParsedDocument,

    /// Text the parser ran on.
    pub raw_text: String,

    /// Confidence report, present when the input was a detection sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<ConfidenceReport>,

    /// Extraction warnings.
    pub warnings: Vec<String>,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl ProcessedDocument {
    pub fn kind(&self) -> DocumentKind {
        self.record.kind()
    }
}

/// Runs the parser for a document kind and, for detection input, the
/// confidence aggregation.
pub struct DocumentProcessor {
    resume: ResumeParser,
    identity: IdentityParser,
    notes: NotesParser,
    /// Floor for the confidence report.
    min_confidence: f64,
    /// Join detections in reading order instead of input order.
    reading_order: bool,
}

impl DocumentProcessor {
    /// Create a processor with default settings.
    pub fn new() -> Self {
        Self {
            resume: ResumeParser::new(),
            identity: IdentityParser::new(),
            notes: NotesParser::new(),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            reading_order: false,
        }
    }

    /// Create a processor from configuration. Patterns are compiled once.
    pub fn from_config(config: &DocsiftConfig) -> Result<Self> {
        config.validate()?;
        let patterns = PatternSet::compile(&config.patterns)?;

        Ok(Self {
            resume: ResumeParser::with_patterns(&patterns, &config.extraction),
            identity: IdentityParser::with_patterns(&patterns, &config.extraction),
            notes: NotesParser::with_config(&config.extraction),
            min_confidence: config.confidence.min_confidence,
            reading_order: config.confidence.reading_order,
        })
    }

    /// Set minimum confidence for the quality report. Fails outside [0, 1].
    pub fn with_min_confidence(mut self, confidence: f64) -> Result<Self> {
        check_min_confidence(confidence)?;
        self.min_confidence = confidence;
        Ok(self)
    }

    /// Set reading-order joining of detections.
    pub fn with_reading_order(mut self, enabled: bool) -> Self {
        self.reading_order = enabled;
        self
    }

    /// Parse text as the given kind of document.
    pub fn parse(&self, kind: DocumentKind, text: &str) -> ParsedDocument {
        match kind {
            DocumentKind::Resume => ParsedDocument::Resume(self.resume.parse(text)),
            DocumentKind::Identity => ParsedDocument::Identity(self.identity.parse(text)),
            DocumentKind::Notes => ParsedDocument::Notes(self.notes.parse(text)),
        }
    }

    /// Process recognized input.
    ///
    /// Detection texts are space-joined (all of them, regardless of
    /// confidence) to form the parser input; the confidence report is built
    /// from the detections in input order.
    pub fn process(&self, kind: DocumentKind, input: &RecognizedInput) -> ProcessedDocument {
        let start = Instant::now();

        let (raw_text, quality) = match input {
            RecognizedInput::Text(text) => (text.clone(), None),
            RecognizedInput::Detections(detections) => {
                let report = aggregate(detections, self.min_confidence);
                let text = if self.reading_order {
                    let mut ordered = detections.clone();
                    sort_by_reading_order(&mut ordered);
                    join_text(&ordered)
                } else {
                    join_text(detections)
                };
                (text, Some(report))
            }
        };

        info!("Processing {} document ({} characters)", kind, raw_text.len());

        let record = self.parse(kind, &raw_text);
        let mut warnings = record_warnings(&record);

        if let Some(report) = &quality {
            if report.is_empty() {
                warnings.push(format!(
                    "No detections at or above confidence {:.2}",
                    self.min_confidence
                ));
            }
        }

        debug!("{} document produced {} warnings", kind, warnings.len());

        ProcessedDocument {
            record,
            raw_text,
            quality,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Describe fields that came back empty.
pub fn record_warnings(record: &ParsedDocument) -> Vec<String> {
    match record {
        ParsedDocument::Resume(r) => resume_warnings(r),
        ParsedDocument::Identity(r) => identity_warnings(r),
        ParsedDocument::Notes(r) => notes_warnings(r),
    }
}

fn resume_warnings(record: &ResumeRecord) -> Vec<String> {
    let mut warnings = Vec::new();

    if record.name.is_empty() {
        warnings.push("Could not extract name".to_string());
    }
    if record.email.is_empty() {
        warnings.push("Could not extract email".to_string());
    }
    if record.phone.is_empty() {
        warnings.push("Could not extract phone".to_string());
    }
    if record.skills.is_empty() {
        warnings.push("No known skills found".to_string());
    }

    warnings
}

fn identity_warnings(record: &IdentityRecord) -> Vec<String> {
    let mut warnings = Vec::new();

    if record.name.is_empty() {
        warnings.push("Could not extract name".to_string());
    }
    if record.identifier_number.is_empty() {
        warnings.push("Could not extract identifier number".to_string());
    } else if !is_valid_identifier(&record.identifier_number) {
        warnings.push(format!(
            "Identifier number {} is not 12 ASCII digits",
            record.identifier_number
        ));
    }
    if record.date_of_birth.is_empty() {
        warnings.push("Could not extract date of birth".to_string());
    } else if parse_date_literal(&record.date_of_birth).is_none() {
        warnings.push(format!(
            "Date of birth {} is not a valid calendar date",
            record.date_of_birth
        ));
    }
    if !record.gender.is_known() {
        warnings.push("Could not extract gender".to_string());
    }

    warnings
}

fn notes_warnings(record: &NotesRecord) -> Vec<String> {
    if record.content.trim().is_empty() {
        vec!["Notes are empty".to_string()]
    } else if record.key_points.is_empty() {
        vec!["No key points found".to_string()]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocsiftError;
    use crate::models::records::Gender;

    fn detection(x: f32, y: f32, text: &str, confidence: f64) -> Detection {
        Detection::new(
            vec![[x, y], [x + 40.0, y], [x + 40.0, y + 12.0], [x, y + 12.0]],
            text,
            confidence,
        )
        .unwrap()
    }

    #[test]
    fn test_process_text() {
        let processor = DocumentProcessor::new();
        let input = RecognizedInput::Text("Female\n1234 5678 9012\nDOB 01/01/1990".to_string());

        let result = processor.process(DocumentKind::Identity, &input);

        assert!(result.quality.is_none());
        assert_eq!(result.kind(), DocumentKind::Identity);
        match &result.record {
            ParsedDocument::Identity(record) => {
                assert_eq!(record.gender, Gender::Female);
                assert_eq!(record.identifier_number, "123456789012");
                // "Female" is a candidate name line on its own
                assert_eq!(record.name, "Female");
            }
            other => panic!("unexpected record: {other:?}"),
        }
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_process_detections() {
        let detections = vec![
            detection(0.0, 0.0, "I know", 0.95),
            detection(50.0, 0.0, "Python", 0.7),
            detection(100.0, 0.0, "smudge", 0.2),
        ];
        let input = RecognizedInput::Detections(detections);

        let result = DocumentProcessor::new().process(DocumentKind::Resume, &input);

        assert_eq!(result.raw_text, "I know Python smudge");
        let quality = result.quality.unwrap();
        assert_eq!(quality.all_text, "I know Python");
        assert_eq!(quality.high.len(), 1);
        assert_eq!(quality.medium.len(), 1);
    }

    #[test]
    fn test_reading_order_joining() {
        let detections = vec![
            detection(10.0, 40.0, "second", 0.9),
            detection(10.0, 0.0, "first", 0.9),
        ];
        let input = RecognizedInput::Detections(detections);

        let result = DocumentProcessor::new()
            .with_reading_order(true)
            .process(DocumentKind::Notes, &input);
        assert_eq!(result.raw_text, "first second");
        // the report keeps input order
        assert_eq!(result.quality.unwrap().all_text, "second first");
    }

    #[test]
    fn test_empty_detections() {
        let result = DocumentProcessor::new()
            .with_min_confidence(0.5)
            .unwrap()
            .process(DocumentKind::Notes, &RecognizedInput::Detections(Vec::new()));

        assert_eq!(result.raw_text, "");
        assert_eq!(result.quality.as_ref().unwrap().average_confidence, 0.0);
        assert!(result.warnings.iter().any(|w| w.starts_with("No detections")));
    }

    #[test]
    fn test_invalid_dob_warning() {
        let record = ParsedDocument::Identity(IdentityRecord {
            date_of_birth: "31/02/1990".to_string(),
            ..IdentityRecord::default()
        });

        let warnings = record_warnings(&record);
        assert!(warnings.contains(&"Date of birth 31/02/1990 is not a valid calendar date".to_string()));
    }

    #[test]
    fn test_identifier_shape_warning() {
        let record = ParsedDocument::Identity(IdentityRecord {
            identifier_number: "١٢٣٤٥٦٧٨٩٠١٢".to_string(),
            ..IdentityRecord::default()
        });

        let warnings = record_warnings(&record);
        assert!(warnings.iter().any(|w| w.starts_with("Identifier number")));
    }

    #[test]
    fn test_rejects_out_of_range_floor() {
        let mut config = DocsiftConfig::default();
        config.confidence.min_confidence = 7.0;
        assert!(matches!(
            DocumentProcessor::from_config(&config),
            Err(DocsiftError::Config(_))
        ));

        config.confidence.min_confidence = f64::NAN;
        assert!(DocumentProcessor::from_config(&config).is_err());

        assert!(DocumentProcessor::new().with_min_confidence(-0.1).is_err());
        assert!(DocumentProcessor::new().with_min_confidence(1.0).is_ok());
    }

    #[test]
    fn test_from_config() {
        let mut config = DocsiftConfig::default();
        config.confidence.min_confidence = 0.9;
        config.extraction.key_point_bullets = vec!['>'];

        let processor = DocumentProcessor::from_config(&config).unwrap();
        let input = RecognizedInput::Detections(vec![detection(0.0, 0.0, "> keep", 0.85)]);
        let result = processor.process(DocumentKind::Notes, &input);

        assert!(result.quality.unwrap().is_empty());
        match result.record {
            ParsedDocument::Notes(notes) => assert_eq!(notes.key_points, vec!["> keep"]),
            other => panic!("unexpected record: {other:?}"),
        }
    }
}
