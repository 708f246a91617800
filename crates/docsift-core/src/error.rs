//! Error types for the docsift-core library.
//!
//! Parsing never fails: missing fields come back as empty values. Errors are
//! reserved for malformed input from the recognition side and for broken
//! configuration.

use thiserror::Error;

/// Main error type for the docsift library.
#[derive(Error, Debug)]
pub enum DocsiftError {
    /// A detection produced by the token-level OCR engine violates its contract.
    #[error("invalid detection at index {index}: {source}")]
    InvalidDetection {
        index: usize,
        #[source]
        source: DetectionError,
    },

    /// A configured regular expression failed to compile.
    #[error("invalid {field} pattern: {source}")]
    Pattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// Input payload has the wrong overall shape.
    #[error("invalid input: {0}")]
    Input(String),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Ways a single detection can be malformed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectionError {
    /// One of region, text or confidence is absent.
    #[error("missing {0}")]
    MissingField(&'static str),

    /// Confidence is not within [0, 1].
    #[error("confidence {0} is outside [0, 1]")]
    ConfidenceOutOfRange(f64),

    /// A field is present but has the wrong shape.
    #[error("{0}")]
    Malformed(String),
}

impl DocsiftError {
    pub(crate) fn detection(index: usize, source: DetectionError) -> Self {
        Self::InvalidDetection { index, source }
    }
}

/// Result type for the docsift library.
pub type Result<T> = std::result::Result<T, DocsiftError>;
