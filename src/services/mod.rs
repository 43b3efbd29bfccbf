//! Business logic services

pub mod library;

pub use library::{BorrowOutcome, LibraryService, ReturnOutcome};
