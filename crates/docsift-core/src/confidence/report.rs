//! Confidence tiers and the aggregated quality report.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::detection::Detection;

/// Lower bound of the high tier.
pub const HIGH_CONFIDENCE: f64 = 0.8;

/// Lower bound of the medium tier.
pub const MEDIUM_CONFIDENCE: f64 = 0.6;

/// Default floor below which detections are discarded.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;

/// Confidence band of a retained detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    /// `[0.8, 1.0]`
    High,
    /// `[0.6, 0.8)`
    Medium,
    /// Below 0.6 (but at or above the aggregation floor).
    Low,
}

impl ConfidenceTier {
    /// Tier for a score. Boundaries are fixed and independent of the floor.
    pub fn for_score(confidence: f64) -> Self {
        if confidence >= HIGH_CONFIDENCE {
            ConfidenceTier::High
        } else if confidence >= MEDIUM_CONFIDENCE {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    /// Display color for the tier.
    pub fn color(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "green",
            ConfidenceTier::Medium => "orange",
            ConfidenceTier::Low => "red",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

/// Detections partitioned by confidence, with a text and score summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceReport {
    pub high: Vec<Detection>,
    pub medium: Vec<Detection>,
    pub low: Vec<Detection>,

    /// Space-joined text of every retained detection, in input order.
    pub all_text: String,

    /// Mean confidence of retained detections; 0.0 when none were retained.
    pub average_confidence: f64,
}

impl ConfidenceReport {
    /// Detections in one tier.
    pub fn tier(&self, tier: ConfidenceTier) -> &[Detection] {
        match tier {
            ConfidenceTier::High => &self.high,
            ConfidenceTier::Medium => &self.medium,
            ConfidenceTier::Low => &self.low,
        }
    }

    /// Number of detections that passed the floor.
    pub fn retained(&self) -> usize {
        self.high.len() + self.medium.len() + self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.retained() == 0
    }
}

/// Aggregate detections into a [`ConfidenceReport`].
///
/// Single pass in input order. Detections with confidence below
/// `min_confidence` are dropped entirely; every other detection lands in
/// exactly one tier.
pub fn aggregate(detections: &[Detection], min_confidence: f64) -> ConfidenceReport {
    let mut report = ConfidenceReport::default();
    let mut texts: Vec<&str> = Vec::new();
    let mut total = 0.0f64;

    for detection in detections {
        let confidence = detection.confidence();
        if confidence < min_confidence {
            continue;
        }

        total += confidence;
        texts.push(detection.text());

        match ConfidenceTier::for_score(confidence) {
            ConfidenceTier::High => report.high.push(detection.clone()),
            ConfidenceTier::Medium => report.medium.push(detection.clone()),
            ConfidenceTier::Low => report.low.push(detection.clone()),
        }
    }

    if !texts.is_empty() {
        report.all_text = texts.join(" ");
        report.average_confidence = total / texts.len() as f64;
    }

    debug!(
        "Aggregated {} of {} detections (high={}, medium={}, low={}, avg={:.3})",
        texts.len(),
        detections.len(),
        report.high.len(),
        report.medium.len(),
        report.low.len(),
        report.average_confidence
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn detection(text: &str, confidence: f64) -> Detection {
        Detection::new(vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]], text, confidence)
            .unwrap()
    }

    fn texts(detections: &[Detection]) -> Vec<&str> {
        detections.iter().map(Detection::text).collect()
    }

    #[test]
    fn test_tiers() {
        let detections = vec![
            detection("a", 0.9),
            detection("b", 0.75),
            detection("c", 0.55),
            detection("d", 0.3),
        ];

        let report = aggregate(&detections, 0.5);

        assert_eq!(texts(&report.high), vec!["a"]);
        assert_eq!(texts(&report.medium), vec!["b"]);
        assert_eq!(texts(&report.low), vec!["c"]);
        assert_eq!(report.all_text, "a b c");
        assert_eq!(report.retained(), 3);

        let expected = (0.9 + 0.75 + 0.55) / 3.0;
        assert!((report.average_confidence - expected).abs() < 1e-12);
    }

    #[test]
    fn test_boundaries_are_half_open() {
        let detections = vec![
            detection("eight", 0.8),
            detection("six", 0.6),
            detection("five", 0.5),
            detection("one", 1.0),
        ];

        let report = aggregate(&detections, DEFAULT_MIN_CONFIDENCE);
        assert_eq!(texts(&report.high), vec!["eight", "one"]);
        assert_eq!(texts(&report.medium), vec!["six"]);
        assert_eq!(texts(&report.low), vec!["five"]);
    }

    #[test]
    fn test_values_just_below_a_boundary() {
        let detections = vec![
            detection("edge", 0.79999999),
            detection("mid", 0.59999999),
            detection("floor", 0.49999999),
        ];

        let report = aggregate(&detections, 0.5);
        assert!(report.high.is_empty());
        assert_eq!(texts(&report.medium), vec!["edge"]);
        assert_eq!(texts(&report.low), vec!["mid"]);
        assert_eq!(report.all_text, "edge mid");
    }

    #[test]
    fn test_floor_above_medium_boundary() {
        let detections = vec![detection("a", 0.65), detection("b", 0.72), detection("c", 0.85)];

        let report = aggregate(&detections, 0.7);
        assert!(report.low.is_empty());
        assert_eq!(texts(report.tier(ConfidenceTier::Medium)), vec!["b"]);
        assert_eq!(report.all_text, "b c");
    }

    #[test]
    fn test_empty() {
        let report = aggregate(&[], 0.5);
        assert_eq!(report, ConfidenceReport::default());
        assert_eq!(report.average_confidence, 0.0);
        assert!(report.is_empty());
    }

    #[test]
    fn test_everything_filtered() {
        let report = aggregate(&[detection("x", 0.1)], 0.5);
        assert_eq!(report.all_text, "");
        assert_eq!(report.average_confidence, 0.0);
    }

    #[test]
    fn test_tier_colors() {
        assert_eq!(ConfidenceTier::for_score(0.95).color(), "green");
        assert_eq!(ConfidenceTier::for_score(0.7).color(), "orange");
        assert_eq!(ConfidenceTier::for_score(0.2).color(), "red");
    }
}
