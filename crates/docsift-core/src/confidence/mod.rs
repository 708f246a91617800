//! Confidence aggregation over token-level OCR detections.

mod detection;
mod report;

pub use detection::{
    Detection, Point, detections_from_value, join_text, parse_detections, sort_by_reading_order,
};
pub use report::{
    ConfidenceReport, ConfidenceTier, DEFAULT_MIN_CONFIDENCE, HIGH_CONFIDENCE, MEDIUM_CONFIDENCE,
    aggregate,
};
