//! Keyword-table skill matching.

/// Matches an ordered keyword table against text.
///
/// Matching is a case-insensitive substring test. Output follows table order,
/// never text order, and a keyword listed twice is reported once.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    keywords: Vec<String>,
}

impl SkillMatcher {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    /// Return the keywords found in text.
    pub fn find(&self, text: &str) -> Vec<String> {
        let text_lower = text.to_lowercase();
        let mut found: Vec<String> = Vec::new();

        for keyword in &self.keywords {
            if keyword.is_empty() || found.contains(keyword) {
                continue;
            }
            if text_lower.contains(&keyword.to_lowercase()) {
                found.push(keyword.clone());
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(keywords: &[&str]) -> SkillMatcher {
        SkillMatcher::new(keywords.iter().map(|k| k.to_string()).collect())
    }

    #[test]
    fn test_table_order() {
        let m = matcher(&["python", "java", "react", "sql"]);
        assert_eq!(m.find("SQL, React and Python"), vec!["python", "react", "sql"]);
    }

    #[test]
    fn test_substring_semantics() {
        // "javascript" contains "java"
        let m = matcher(&["java", "javascript"]);
        assert_eq!(m.find("JavaScript developer"), vec!["java", "javascript"]);
    }

    #[test]
    fn test_duplicates_and_empty_keywords() {
        let m = matcher(&["git", "", "git"]);
        assert_eq!(m.find("git and github"), vec!["git"]);
        assert!(m.find("").is_empty());
    }
}
