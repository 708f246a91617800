//! Text normalization applied ahead of single-line pattern matching.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    // Everything except word characters, whitespace, '@', '.' and '-'
    static ref DISALLOWED: Regex = Regex::new(r"[^\w\s@.\-]").unwrap();
}

/// Clean raw recognized text.
///
/// Collapses whitespace runs to a single space, replaces characters outside
/// `[\w\s@.-]` with a space, collapses again and trims. The result is a
/// single line, so line-oriented heuristics must run on the raw text instead.
///
/// `clean(clean(s)) == clean(s)` holds for every input.
pub fn clean(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let filtered = DISALLOWED.replace_all(&collapsed, " ");
    WHITESPACE_RUN.replace_all(&filtered, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_collapses_whitespace() {
        assert_eq!(clean("  John \t Doe\n\nEngineer  "), "John Doe Engineer");
    }

    #[test]
    fn test_clean_strips_disallowed_characters() {
        assert_eq!(clean("Phone: (555) 123-4567!"), "Phone 555 123-4567");
        assert_eq!(clean("mail:jane.doe@example.com;"), "mail jane.doe@example.com");
    }

    #[test]
    fn test_clean_keeps_unicode_word_characters() {
        assert_eq!(clean("Zoë  Łukasz"), "Zoë Łukasz");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let samples = [
            "",
            "   ",
            "a\tb\nc",
            "• first point\n2. second / third",
            "(+91) 98765-43210 ## email: x@y.io",
            "12/05/1990 — DOB",
        ];

        for sample in samples {
            let once = clean(sample);
            assert_eq!(clean(&once), once, "input: {sample:?}");
        }
    }

    #[test]
    fn test_clean_empty() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("!!! ???"), "");
    }
}
