//! Core library for turning OCR output into structured records.
//!
//! This crate provides:
//! - Text normalization ahead of pattern matching
//! - Regex field extractors (email, phone, dates, 12-digit identity numbers)
//! - Line heuristics for names, gender and key points
//! - Resume, identity-card and notes parsers
//! - Confidence aggregation over token-level detections
//!
//! Recognition itself happens elsewhere; this crate consumes either the
//! recognized text or the engine's `(region, text, confidence)` detections.

pub mod confidence;
pub mod document;
pub mod error;
pub mod extract;
pub mod infer;
pub mod models;
pub mod pipeline;
pub mod text;

pub use confidence::{ConfidenceReport, ConfidenceTier, Detection, aggregate, parse_detections};
pub use document::{
    DocumentParser, IdentityParser, NotesParser, ResumeParser, parse_identity, parse_notes,
    parse_resume,
};
pub use error::{DetectionError, DocsiftError, Result};
pub use models::config::DocsiftConfig;
pub use models::records::{
    DocumentKind, Gender, IdentityRecord, NotesRecord, ParsedDocument, ResumeRecord,
};
pub use pipeline::{DocumentProcessor, ProcessedDocument, RecognizedInput};
pub use text::clean;
