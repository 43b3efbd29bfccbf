//! Book model and title normalization.

use serde::{Deserialize, Serialize};

/// One catalog entry. The title is the sole lookup key; comparison is
/// case-insensitive and colon-insensitive while the stored value keeps its
/// original casing and punctuation.
///
/// Both text fields are optional so that records hand-edited on disk with
/// missing keys round-trip unchanged instead of being rewritten with
/// invented values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub copies: u64,
}

impl Book {
    pub fn new(title: String, author: String, copies: u64) -> Self {
        Self {
            title: Some(title),
            author: Some(author),
            copies,
        }
    }

    /// Whether this book's title matches an already-normalized lookup key.
    pub fn matches(&self, key: &str) -> bool {
        normalize_title(self.title.as_deref().unwrap_or_default()) == key
    }

    /// Title for display, substituting missing values.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Unknown")
    }

    /// Author for display, substituting missing values.
    pub fn display_author(&self) -> &str {
        self.author.as_deref().unwrap_or("Unknown")
    }
}

/// Normalize an operator-supplied title for comparison: trim surrounding
/// whitespace, lowercase, then strip every colon. Applied to both sides of
/// a lookup; never applied to stored values.
pub fn normalize_title(s: &str) -> String {
    s.trim().to_lowercase().replace(':', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("  Dune  "), "dune");
        assert_eq!(normalize_title("The Hobbit"), "the hobbit");
        assert_eq!(normalize_title("O:Brien's Tale"), "obrien's tale");
        assert_eq!(normalize_title(""), "");
    }

    #[test]
    fn test_matches_is_case_and_colon_insensitive() {
        let book = Book::new("O:Brien's Tale".into(), "O'Brien".into(), 1);
        assert!(book.matches(&normalize_title("obrien's tale")));
        assert!(book.matches(&normalize_title("  O:BRIEN'S TALE ")));
        assert!(!book.matches(&normalize_title("obriens tale")));
    }

    #[test]
    fn test_matches_missing_title_as_empty() {
        let book = Book {
            title: None,
            author: None,
            copies: 0,
        };
        assert!(book.matches(""));
        assert!(!book.matches("dune"));
    }

    #[test]
    fn test_display_fallbacks() {
        let book = Book {
            title: None,
            author: None,
            copies: 0,
        };
        assert_eq!(book.display_title(), "Unknown");
        assert_eq!(book.display_author(), "Unknown");

        let book = Book::new(String::new(), "A".into(), 1);
        assert_eq!(book.display_title(), "");
    }
}
