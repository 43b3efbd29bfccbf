//! Catalog operations over a single-owner in-memory state.

use crate::error::AppResult;
use crate::models::{Book, Catalog};
use crate::store::CatalogStore;

/// Result of a borrow attempt. Misses and exhausted stock are normal
/// outcomes for the operator, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowOutcome {
    Borrowed,
    Unavailable,
    NotFound,
}

/// Result of a return attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    Returned,
    NotFound,
}

/// Owns the catalog for the lifetime of the process and keeps the store in
/// sync: every mutation is persisted before its result is reported.
pub struct LibraryService {
    store: CatalogStore,
    catalog: Catalog,
}

impl LibraryService {
    /// Load the catalog once and wrap it with its store.
    pub fn open(store: CatalogStore) -> Self {
        let catalog = store.load();
        Self { store, catalog }
    }

    /// Append a new book. Titles are stored verbatim; duplicates are
    /// allowed and never merged.
    pub fn add_book(&mut self, title: String, author: String, copies: u64) -> AppResult<()> {
        tracing::info!("Adding book {title:?} ({copies} copies)");
        self.catalog.books.push(Book::new(title, author, copies));
        self.store.save(&self.catalog)
    }

    /// Borrow one copy of the first book matching `title`.
    pub fn borrow_book(&mut self, title: &str) -> AppResult<BorrowOutcome> {
        let Some(book) = self.catalog.find_mut(title) else {
            return Ok(BorrowOutcome::NotFound);
        };
        if book.copies == 0 {
            return Ok(BorrowOutcome::Unavailable);
        }
        book.copies -= 1;
        self.catalog.borrowed_count = self.catalog.borrowed_count.saturating_add(1);
        self.store.save(&self.catalog)?;
        Ok(BorrowOutcome::Borrowed)
    }

    /// Return one copy of the first book matching `title`. The borrowed
    /// count clamps at zero: returns are accepted even for copies this
    /// catalog never lent out.
    pub fn return_book(&mut self, title: &str) -> AppResult<ReturnOutcome> {
        let Some(book) = self.catalog.find_mut(title) else {
            return Ok(ReturnOutcome::NotFound);
        };
        book.copies += 1;
        self.catalog.borrowed_count = self.catalog.borrowed_count.saturating_sub(1);
        self.store.save(&self.catalog)?;
        Ok(ReturnOutcome::Returned)
    }

    /// First book matching `title`, if any.
    pub fn search_book(&self, title: &str) -> Option<&Book> {
        self.catalog.find(title)
    }

    /// All books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.catalog.books
    }

    pub fn borrowed_count(&self) -> u64 {
        self.catalog.borrowed_count
    }
}
