//! Document-specific assemblers.
//!
//! Each parser composes pattern extractors and line heuristics into one
//! freshly built record. Parsing is total: any string, including the empty
//! string, yields a fully populated record.

mod identity;
mod notes;
mod resume;

pub use identity::IdentityParser;
pub use notes::NotesParser;
pub use resume::ResumeParser;

use std::borrow::Cow;

use crate::models::records::{IdentityRecord, NotesRecord, ResumeRecord};
use crate::text::clean;

/// Trait for document parsers.
pub trait DocumentParser {
    /// The record this parser produces.
    type Record;

    /// Parse a record from recognized text.
    fn parse(&self, text: &str) -> Self::Record;
}

/// Parse a resume with the default keyword table and patterns.
pub fn parse_resume(text: &str) -> ResumeRecord {
    ResumeParser::new().parse(text)
}

/// Parse an identity card with the default patterns and boilerplate list.
pub fn parse_identity(text: &str) -> IdentityRecord {
    IdentityParser::new().parse(text)
}

/// Summarize a notes page.
pub fn parse_notes(text: &str) -> NotesRecord {
    NotesParser::new().parse(text)
}

/// Text handed to single-line pattern extractors.
fn pattern_input(text: &str, normalize: bool) -> Cow<'_, str> {
    if normalize {
        Cow::Owned(clean(text))
    } else {
        Cow::Borrowed(text)
    }
}
