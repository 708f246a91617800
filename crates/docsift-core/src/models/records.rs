//! Structured records produced by the document parsers.
//!
//! Every record is freshly built per input and fully populated: a field the
//! parser found no signal for holds its empty value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fields recovered from a resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Matched keywords, in keyword-table order.
    pub skills: Vec<String>,
}

/// Fields recovered from an identity card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub name: String,
    /// Digits only, whitespace removed.
    pub identifier_number: String,
    /// First literal match; not checked against the calendar.
    pub date_of_birth: String,
    pub gender: Gender,
}

/// Summary of a free-form notes page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesRecord {
    /// The input text, verbatim.
    pub content: String,
    pub word_count: usize,
    pub line_count: usize,
    /// Bullet and numbered lines, in source order.
    pub key_points: Vec<String>,
}

/// Gender as printed on an identity document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    /// No signal in the text. Serialized as an empty string.
    #[default]
    #[serde(rename = "")]
    Unknown,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unknown => "",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Gender::Unknown)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The document families the parsers understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    Identity,
    Notes,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::Identity => "identity",
            DocumentKind::Notes => "notes",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "resume" | "cv" => Ok(DocumentKind::Resume),
            "identity" | "id" | "id-card" | "aadhar" | "aadhaar" => Ok(DocumentKind::Identity),
            "notes" | "handwritten" => Ok(DocumentKind::Notes),
            other => Err(format!("unknown document kind: {other}")),
        }
    }
}

/// A parsed record tagged with its document kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "document_type", rename_all = "snake_case")]
pub enum ParsedDocument {
    Resume(ResumeRecord),
    Identity(IdentityRecord),
    Notes(NotesRecord),
}

impl ParsedDocument {
    pub fn kind(&self) -> DocumentKind {
        match self {
            ParsedDocument::Resume(_) => DocumentKind::Resume,
            ParsedDocument::Identity(_) => DocumentKind::Identity,
            ParsedDocument::Notes(_) => DocumentKind::Notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_serialization() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), r#""Female""#);
        assert_eq!(serde_json::to_string(&Gender::Unknown).unwrap(), r#""""#);
        assert_eq!(serde_json::from_str::<Gender>(r#""""#).unwrap(), Gender::Unknown);
    }

    #[test]
    fn test_identity_field_names() {
        let record = IdentityRecord {
            name: "Ravi Kumar".to_string(),
            identifier_number: "123456789012".to_string(),
            date_of_birth: "01/01/1990".to_string(),
            gender: Gender::Male,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["identifier_number"], "123456789012");
        assert_eq!(json["date_of_birth"], "01/01/1990");
        assert_eq!(json["gender"], "Male");
    }

    #[test]
    fn test_parsed_document_is_tagged() {
        let doc = ParsedDocument::Notes(NotesRecord::default());
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["document_type"], "notes");
        assert_eq!(json["word_count"], 0);
        assert_eq!(doc.kind(), DocumentKind::Notes);
    }

    #[test]
    fn test_document_kind_from_str() {
        assert_eq!("Resume".parse::<DocumentKind>(), Ok(DocumentKind::Resume));
        assert_eq!("aadhar".parse::<DocumentKind>(), Ok(DocumentKind::Identity));
        assert_eq!("handwritten".parse::<DocumentKind>(), Ok(DocumentKind::Notes));
        assert!("invoice".parse::<DocumentKind>().is_err());
    }
}
