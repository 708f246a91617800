//! Record types and configuration.

pub mod config;
pub mod records;

pub use config::{ConfidenceConfig, DocsiftConfig, ExtractionConfig, PatternConfig};
pub use records::{DocumentKind, Gender, IdentityRecord, NotesRecord, ParsedDocument, ResumeRecord};
