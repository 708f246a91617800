//! Line-oriented heuristics for fields without a fixed lexical pattern.
//!
//! These run on the raw text, never on normalized text, so that line breaks
//! survive. Every heuristic returns an empty value when no line qualifies.

pub mod gender;
pub mod key_points;
pub mod name;

pub use gender::infer_gender;
pub use key_points::KeyPointDetector;
pub use name::NameInferencer;

/// Split text on `\n` and trim each line. Empty lines are kept.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("  a \r\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("x\n"), vec!["x", ""]);
    }
}
