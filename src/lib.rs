//! Bookstand
//!
//! The persistence and reconciliation core of a book catalog manager. The
//! collection of books is persisted as one JSON array in a pluggable
//! key-value text store; a latency-simulating catalog API read-modify-writes
//! it, and a state controller owns the in-memory copy plus the UI-facing
//! loading/error/edit state and the theme preference.

pub mod api;
pub mod catalog;
pub mod error;
pub mod prefs;
pub mod storage;
pub mod types;

pub use api::CatalogApi;
pub use catalog::Catalog;
pub use error::{CatalogError, Result, StorageError, ValidationError};
pub use prefs::Preferences;
pub use storage::{KeyValueStore, LocalStore, MemoryStore};
pub use types::{Book, BookDraft, BookForm, Theme};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::new(1, "1984", "George Orwell", 9.99);
        assert_eq!(book.title, "1984");
        assert_eq!(book.price, 9.99);
    }
}
