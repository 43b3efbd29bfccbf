//! Data models for Biblio

pub mod book;
pub mod catalog;

pub use book::{normalize_title, Book};
pub use catalog::Catalog;
