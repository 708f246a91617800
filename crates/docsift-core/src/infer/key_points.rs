//! Bullet and numbered-line detection for notes.

use super::split_lines;

/// Detects key-point lines.
///
/// A trimmed line is a key point when it starts with a bullet glyph, or when
/// its first character is a digit and a `.` appears within its first three
/// characters ("1. ...", "12. ...").
#[derive(Debug, Clone)]
pub struct KeyPointDetector {
    bullets: Vec<char>,
}

impl KeyPointDetector {
    pub fn new() -> Self {
        Self {
            bullets: vec!['•', '-', '*'],
        }
    }

    pub fn with_bullets(bullets: Vec<char>) -> Self {
        Self { bullets }
    }

    pub fn is_key_point(&self, line: &str) -> bool {
        let Some(first) = line.chars().next() else {
            return false;
        };

        if self.bullets.contains(&first) {
            return true;
        }

        first.is_numeric() && line.chars().take(3).any(|c| c == '.')
    }

    /// Collect key points in source order.
    pub fn collect(&self, text: &str) -> Vec<String> {
        split_lines(text)
            .into_iter()
            .filter(|line| self.is_key_point(line))
            .map(str::to_string)
            .collect()
    }
}

impl Default for KeyPointDetector {
    fn default() -> Self {
        Self::new()
    }
}
