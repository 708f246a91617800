//! Localized text detections from a token-level OCR engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DetectionError, DocsiftError, Result};

/// Vertical band (in pixels) treated as one row when sorting by reading order.
const ROW_HEIGHT: f32 = 20.0;

/// A 2D coordinate `[x, y]`.
pub type Point = [f32; 2];

/// A recognized text fragment with its region and confidence.
///
/// Deserialization goes through [`Detection::from_value`], so a decoded
/// detection always satisfies the same checks as [`Detection::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Detection {
    /// Polygon bounding the fragment, in engine order.
    region: Vec<Point>,

    /// Recognized text content.
    text: String,

    /// Recognition confidence (0.0 - 1.0).
    confidence: f64,
}

impl Detection {
    /// Build a detection, rejecting confidences outside [0, 1] (and NaN).
    pub fn new(
        region: Vec<Point>,
        text: impl Into<String>,
        confidence: f64,
    ) -> std::result::Result<Self, DetectionError> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(DetectionError::ConfidenceOutOfRange(confidence));
        }

        Ok(Self {
            region,
            text: text.into(),
            confidence,
        })
    }

    /// Decode one detection.
    ///
    /// Accepts the `[region, text, confidence]` triple emitted by most
    /// token-level engines, or an object with `region` (alias `coordinates`),
    /// `text` and `confidence` keys.
    pub fn from_value(value: &Value) -> std::result::Result<Self, DetectionError> {
        let (region, text, confidence) = match value {
            Value::Array(items) => {
                if items.len() > 3 {
                    return Err(DetectionError::Malformed(format!(
                        "expected 3 fields, found {}",
                        items.len()
                    )));
                }
                (items.first(), items.get(1), items.get(2))
            }
            Value::Object(map) => (
                map.get("region").or_else(|| map.get("coordinates")),
                map.get("text"),
                map.get("confidence"),
            ),
            _ => {
                return Err(DetectionError::Malformed(
                    "expected an array or an object".to_string(),
                ));
            }
        };

        let region = present(region, "region")?;
        let text = present(text, "text")?;
        let confidence = present(confidence, "confidence")?;

        let region = parse_region(region)?;
        let text = text
            .as_str()
            .ok_or_else(|| DetectionError::Malformed("text must be a string".to_string()))?;
        let confidence = confidence
            .as_f64()
            .ok_or_else(|| DetectionError::Malformed("confidence must be a number".to_string()))?;

        Self::new(region, text, confidence)
    }

    pub fn region(&self) -> &[Point] {
        &self.region
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Get the axis-aligned bounding rectangle `(min_x, min_y, max_x, max_y)`.
    pub fn rect(&self) -> (f32, f32, f32, f32) {
        if self.region.is_empty() {
            return (0.0, 0.0, 0.0, 0.0);
        }

        let min_x = self.region.iter().map(|p| p[0]).fold(f32::INFINITY, f32::min);
        let max_x = self.region.iter().map(|p| p[0]).fold(f32::NEG_INFINITY, f32::max);
        let min_y = self.region.iter().map(|p| p[1]).fold(f32::INFINITY, f32::min);
        let max_y = self.region.iter().map(|p| p[1]).fold(f32::NEG_INFINITY, f32::max);

        (min_x, min_y, max_x, max_y)
    }
}

impl TryFrom<Value> for Detection {
    type Error = DetectionError;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

fn present<'a>(
    value: Option<&'a Value>,
    field: &'static str,
) -> std::result::Result<&'a Value, DetectionError> {
    value
        .filter(|v| !v.is_null())
        .ok_or(DetectionError::MissingField(field))
}

fn parse_region(value: &Value) -> std::result::Result<Vec<Point>, DetectionError> {
    let points = value
        .as_array()
        .ok_or_else(|| DetectionError::Malformed("region must be a list of points".to_string()))?;

    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let coords = point.as_array().filter(|c| c.len() >= 2);
            match coords.map(|c| (c[0].as_f64(), c[1].as_f64())) {
                Some((Some(x), Some(y))) => Ok([x as f32, y as f32]),
                _ => Err(DetectionError::Malformed(format!(
                    "region point {i} is not an [x, y] pair"
                ))),
            }
        })
        .collect()
}

/// Decode a JSON array of detections.
pub fn detections_from_value(value: &Value) -> Result<Vec<Detection>> {
    let items = value
        .as_array()
        .ok_or_else(|| DocsiftError::Input("expected a JSON array of detections".to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Detection::from_value(item).map_err(|source| DocsiftError::detection(index, source))
        })
        .collect()
}

/// Parse a JSON document holding an array of detections.
pub fn parse_detections(json: &str) -> Result<Vec<Detection>> {
    let value: Value = serde_json::from_str(json)?;
    detections_from_value(&value)
}

/// Space-join detection texts in slice order.
pub fn join_text(detections: &[Detection]) -> String {
    detections
        .iter()
        .map(Detection::text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sort detections top-to-bottom, then left-to-right within a row.
pub fn sort_by_reading_order(detections: &mut [Detection]) {
    detections.sort_by(|a, b| {
        let (ax, ay, _, _) = a.rect();
        let (bx, by, _, _) = b.rect();

        // Group by approximate vertical position
        let row_a = (ay / ROW_HEIGHT) as i32;
        let row_b = (by / ROW_HEIGHT) as i32;

        if row_a != row_b {
            row_a.cmp(&row_b)
        } else {
            ax.partial_cmp(&bx).unwrap_or(std::cmp::Ordering::Equal)
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(x: f32, y: f32) -> Vec<Point> {
        vec![[x, y], [x + 50.0, y], [x + 50.0, y + 10.0], [x, y + 10.0]]
    }

    #[test]
    fn test_parse_triples() {
        let json = r#"[
            [[[10, 10], [60, 10], [60, 20], [10, 20]], "Jane", 0.93],
            [[[70, 10], [120, 10], [120, 20], [70, 20]], "Doe", 0.5]
        ]"#;

        let detections = parse_detections(json).unwrap();
        assert_eq!(detections.len(), 2);
        assert_eq!(detections[0].text(), "Jane");
        assert_eq!(detections[0].region()[1], [60.0, 10.0]);
        assert_eq!(detections[1].confidence(), 0.5);
    }

    #[test]
    fn test_parse_objects() {
        let json = r#"[{"coordinates": [[0, 0], [1, 1]], "text": "x", "confidence": 1}]"#;
        let detections = parse_detections(json).unwrap();
        assert_eq!(detections[0].confidence(), 1.0);
        assert_eq!(detections[0].region(), [[0.0, 0.0], [1.0, 1.0]]);
    }

    #[test]
    fn test_missing_field() {
        let json = r#"[[[[0, 0]], "ok", 0.9], [[[0, 0]], "no score"]]"#;
        let err = parse_detections(json).unwrap_err();

        match err {
            DocsiftError::InvalidDetection { index, source } => {
                assert_eq!(index, 1);
                assert_eq!(source, DetectionError::MissingField("confidence"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let json = r#"[{"region": [[0, 0]], "confidence": 0.4}]"#;
        assert!(matches!(
            parse_detections(json),
            Err(DocsiftError::InvalidDetection {
                source: DetectionError::MissingField("text"),
                ..
            })
        ));
    }

    #[test]
    fn test_confidence_out_of_range() {
        let json = r#"[[[[0, 0]], "high", 1.2]]"#;
        assert!(matches!(
            parse_detections(json),
            Err(DocsiftError::InvalidDetection {
                index: 0,
                source: DetectionError::ConfidenceOutOfRange(_)
            })
        ));

        assert!(Detection::new(vec![], "x", -0.1).is_err());
        assert!(Detection::new(vec![], "x", f64::NAN).is_err());
        assert!(Detection::new(vec![], "x", 0.0).is_ok());
    }

    #[test]
    fn test_malformed_shapes() {
        assert!(matches!(parse_detections(r#"{"text": "x"}"#), Err(DocsiftError::Input(_))));
        assert!(matches!(
            parse_detections(r#"[[[[0, "a"]], "x", 0.5]]"#),
            Err(DocsiftError::InvalidDetection {
                source: DetectionError::Malformed(_),
                ..
            })
        ));
        assert!(matches!(
            parse_detections(r#"[[[[0, 0]], "x", 0.5, "extra"]]"#),
            Err(DocsiftError::InvalidDetection { .. })
        ));
        assert!(parse_detections("[]").unwrap().is_empty());
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let detection = Detection::new(quad(0.0, 0.0), "hello", 0.75).unwrap();
        let json = serde_json::to_string(&detection).unwrap();
        let back: Detection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, detection);

        let bad = r#"{"region": [], "text": "x", "confidence": 7}"#;
        assert!(serde_json::from_str::<Detection>(bad).is_err());
    }

    #[test]
    fn test_geometry() {
        let detection = Detection::new(quad(10.0, 20.0), "t", 0.9).unwrap();
        assert_eq!(detection.rect(), (10.0, 20.0, 60.0, 30.0));
        assert_eq!(Detection::new(vec![], "t", 0.9).unwrap().rect(), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_confidence_keeps_full_precision() {
        let json = r#"[[[[0, 0]], "edge", 0.79999999], [[[0, 0]], "floor", 0.49999999]]"#;
        let detections = parse_detections(json).unwrap();

        assert!(detections[0].confidence() < 0.8);
        assert!(detections[1].confidence() < 0.5);
    }

    #[test]
    fn test_reading_order() {
        let mut detections = vec![
            Detection::new(quad(200.0, 52.0), "world", 0.9).unwrap(),
            Detection::new(quad(10.0, 5.0), "Title", 0.9).unwrap(),
            Detection::new(quad(10.0, 45.0), "hello", 0.9).unwrap(),
        ];

        sort_by_reading_order(&mut detections);
        assert_eq!(join_text(&detections), "Title hello world");
    }
}
