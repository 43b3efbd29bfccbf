//! Catalog root object.

use serde::{Deserialize, Serialize};

use super::book::{normalize_title, Book};

/// The persisted root object: every book plus the aggregate count of
/// currently-outstanding borrowed copies. `borrowed_count` is stored
/// independently, never recomputed from the books.
///
/// Both fields default so a partially-populated file loads with the
/// missing pieces filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub borrowed_count: u64,
}

impl Catalog {
    /// First book whose title matches the operator-supplied one. Duplicate
    /// titles are permitted in the data model; only the first match in
    /// insertion order is ever addressed.
    pub fn find(&self, title: &str) -> Option<&Book> {
        let key = normalize_title(title);
        self.books.iter().find(|b| b.matches(&key))
    }

    /// Mutable variant of [`Catalog::find`].
    pub fn find_mut(&mut self, title: &str) -> Option<&mut Book> {
        let key = normalize_title(title);
        self.books.iter_mut().find(|b| b.matches(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_match_wins() {
        let catalog = Catalog {
            books: vec![
                Book::new("Dune".into(), "Herbert".into(), 1),
                Book::new("dune".into(), "Someone Else".into(), 5),
            ],
            borrowed_count: 0,
        };
        let found = catalog.find("DUNE").expect("should match");
        assert_eq!(found.author.as_deref(), Some("Herbert"));
    }

    #[test]
    fn test_find_no_match() {
        let catalog = Catalog::default();
        assert!(catalog.find("anything").is_none());
    }

    #[test]
    fn test_missing_fields_default_on_decode() {
        let catalog: Catalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.books.is_empty());
        assert_eq!(catalog.borrowed_count, 0);

        let catalog: Catalog =
            serde_json::from_str(r#"{"books": [{"title": "X"}], "borrowed_count": 3}"#).unwrap();
        assert_eq!(catalog.books.len(), 1);
        assert_eq!(catalog.books[0].title.as_deref(), Some("X"));
        assert_eq!(catalog.books[0].author, None);
        assert_eq!(catalog.books[0].copies, 0);
        assert_eq!(catalog.borrowed_count, 3);
    }
}
