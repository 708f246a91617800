//! Notes summarization.

use tracing::info;

use crate::infer::KeyPointDetector;
use crate::models::config::ExtractionConfig;
use crate::models::records::NotesRecord;

use super::DocumentParser;

/// Notes parser: counts plus bullet and numbered key points.
pub struct NotesParser {
    key_points: KeyPointDetector,
}

impl NotesParser {
    /// Create a parser with the default bullet glyphs.
    pub fn new() -> Self {
        Self {
            key_points: KeyPointDetector::new(),
        }
    }

    pub fn with_config(extraction: &ExtractionConfig) -> Self {
        Self {
            key_points: KeyPointDetector::with_bullets(extraction.key_point_bullets.clone()),
        }
    }
}

impl Default for NotesParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for NotesParser {
    type Record = NotesRecord;

    fn parse(&self, text: &str) -> NotesRecord {
        info!("Parsing notes from {} characters of text", text.len());

        NotesRecord {
            content: text.to_string(),
            word_count: text.split_whitespace().count(),
            line_count: count_lines(text),
            key_points: self.key_points.collect(text),
        }
    }
}

/// Count `\n`-delimited segments. A trailing newline opens one more (empty)
/// segment; the empty string has no lines.
fn count_lines(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.split('\n').count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_notes() {
        let text = "Meeting notes\n• first\n2. second\nnot a point\n-third";
        let record = NotesParser::new().parse(text);

        assert_eq!(record.content, text);
        assert_eq!(record.word_count, 10);
        assert_eq!(record.line_count, 5);
        assert_eq!(record.key_points, vec!["• first", "2. second", "-third"]);
    }

    #[test]
    fn test_trailing_newline_counts_a_line() {
        assert_eq!(count_lines("a\nb\n"), 3);
        assert_eq!(count_lines("a"), 1);
        assert_eq!(count_lines("\n"), 2);
    }

    #[test]
    fn test_content_is_verbatim() {
        let text = "  * spaced  \r\n";
        let record = NotesParser::new().parse(text);
        assert_eq!(record.content, text);
        assert_eq!(record.key_points, vec!["* spaced"]);
    }

    #[test]
    fn test_empty_notes() {
        assert_eq!(NotesParser::new().parse(""), NotesRecord::default());
    }
}
