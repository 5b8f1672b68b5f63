//! The catalog API: latency-simulating CRUD over a key-value store
//!
//! Every operation models one network round-trip (a fixed sleep), then does a
//! full read-modify-write of the collection as a single JSON array. Mutations
//! serialize through one writer lock so overlapping in-flight operations
//! cannot lose each other's writes; the sleep happens before the lock is
//! taken, since it stands in for the wire and not for store contention.

use crate::error::{CatalogError, Result};
use crate::storage::KeyValueStore;
use crate::types::{Book, BookDraft};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Store key holding the JSON array of books
const BOOKS_KEY: &str = "books";

/// Simulated network round-trip applied to every operation
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Collection persisted on first read of an empty backend
fn seed_books() -> Vec<Book> {
    vec![
        Book::new(1, "The Great Gatsby", "F. Scott Fitzgerald", 10.99),
        Book::new(2, "To Kill a Mockingbird", "Harper Lee", 12.50),
        Book::new(3, "1984", "George Orwell", 9.99),
        Book::new(4, "Pride and Prejudice", "Jane Austen", 8.75),
    ]
}

/// Latency-simulating catalog API over a shared key-value store
pub struct CatalogApi {
    store: Arc<dyn KeyValueStore>,
    latency: Duration,
    writer: Mutex<()>,
}

impl CatalogApi {
    /// Create an API with the default simulated latency
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_latency(store, DEFAULT_LATENCY)
    }

    /// Create an API with an explicit simulated latency (zero for tests)
    pub fn with_latency(store: Arc<dyn KeyValueStore>, latency: Duration) -> Self {
        Self {
            store,
            latency,
            writer: Mutex::new(()),
        }
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Read the persisted collection; `None` means the key was never written
    async fn read_books(&self) -> Result<Option<Vec<Book>>> {
        match self.store.get(BOOKS_KEY).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn write_books(&self, books: &[Book]) -> Result<()> {
        let raw = serde_json::to_string(books)?;
        self.store.set(BOOKS_KEY, raw).await?;
        Ok(())
    }

    /// Fetch the whole collection, seeding the defaults on first use
    pub async fn list(&self) -> Result<Vec<Book>> {
        tracing::debug!("GET /books");
        self.round_trip().await;

        if let Some(books) = self.read_books().await? {
            return Ok(books);
        }

        // First use: seed under the writer lock, re-checking in case a
        // concurrent operation got there first.
        let _guard = self.writer.lock().await;
        if let Some(books) = self.read_books().await? {
            return Ok(books);
        }
        let books = seed_books();
        self.write_books(&books).await?;
        Ok(books)
    }

    /// Create a record: assign a fresh id, append, persist, return it
    ///
    /// Ids are assigned under the writer lock as one past the largest id in
    /// the persisted collection, so rapid successive creates never collide.
    pub async fn create(&self, draft: BookDraft) -> Result<Book> {
        tracing::debug!(title = %draft.title, "POST /books");
        self.round_trip().await;

        let _guard = self.writer.lock().await;
        let mut books = self.read_books().await?.unwrap_or_default();
        let id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let book = draft.into_book(id);
        books.push(book.clone());
        self.write_books(&books).await?;
        Ok(book)
    }

    /// Replace the record with a matching id, persist, return it
    ///
    /// An unknown id is an explicit error and leaves the store untouched.
    pub async fn update(&self, book: Book) -> Result<Book> {
        tracing::debug!(id = book.id, "PUT /books");
        self.round_trip().await;

        let _guard = self.writer.lock().await;
        let mut books = self.read_books().await?.unwrap_or_default();
        let slot = books
            .iter_mut()
            .find(|b| b.id == book.id)
            .ok_or(CatalogError::NotFound(book.id))?;
        *slot = book.clone();
        self.write_books(&books).await?;
        Ok(book)
    }

    /// Remove the record with a matching id, persist
    ///
    /// Removing an id that is not present leaves the collection unchanged.
    pub async fn delete(&self, id: u64) -> Result<()> {
        tracing::debug!(id, "DELETE /books");
        self.round_trip().await;

        let _guard = self.writer.lock().await;
        let mut books = self.read_books().await?.unwrap_or_default();
        books.retain(|b| b.id != id);
        self.write_books(&books).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn instant_api() -> CatalogApi {
        CatalogApi::with_latency(Arc::new(MemoryStore::new()), Duration::ZERO)
    }

    #[tokio::test]
    async fn test_list_seeds_defaults_once() {
        let api = instant_api();

        let first = api.list().await.unwrap();
        assert_eq!(first.len(), 4);
        assert_eq!(first[2].title, "1984");

        // Seeded collection is persisted, not regenerated
        let second = api.list().await.unwrap();
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() {
        let api = instant_api();
        api.list().await.unwrap();

        let dune = api
            .create(BookDraft::new("Dune", "Frank Herbert", 15.0))
            .await
            .unwrap();
        assert_eq!(dune.id, 5);

        let hobbit = api
            .create(BookDraft::new("The Hobbit", "J.R.R. Tolkien", 11.25))
            .await
            .unwrap();
        assert_ne!(hobbit.id, dune.id);

        let books = api.list().await.unwrap();
        assert_eq!(books.len(), 6);
    }

    #[tokio::test]
    async fn test_update_replaces_exactly_one() {
        let api = instant_api();
        let before = api.list().await.unwrap();

        let updated = api
            .update(Book::new(3, "1984", "George Orwell", 11.50))
            .await
            .unwrap();
        assert_eq!(updated.price, 11.50);

        let after = api.list().await.unwrap();
        assert_eq!(after.iter().find(|b| b.id == 3).unwrap().price, 11.50);
        for (a, b) in before.iter().zip(&after) {
            if a.id != 3 {
                assert_eq!(a, b);
            }
        }
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let api = instant_api();
        let before = api.list().await.unwrap();

        let err = api
            .update(Book::new(99, "Ghost", "Nobody", 1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(99)));
        assert_eq!(api.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let api = instant_api();
        let before = api.list().await.unwrap();

        api.delete(2).await.unwrap();
        let after = api.list().await.unwrap();
        assert_eq!(after.len(), before.len() - 1);
        assert!(after.iter().all(|b| b.id != 2));

        // Unknown id: collection unchanged
        api.delete(99).await.unwrap();
        assert_eq!(api.list().await.unwrap(), after);
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_not_lost() {
        let api = Arc::new(instant_api());
        api.list().await.unwrap();

        let a = {
            let api = api.clone();
            tokio::spawn(
                async move { api.create(BookDraft::new("Dune", "Herbert", 15.0)).await },
            )
        };
        let b = {
            let api = api.clone();
            tokio::spawn(async move {
                api.create(BookDraft::new("Hyperion", "Simmons", 13.0)).await
            })
        };
        let (a, b) = (a.await.unwrap().unwrap(), b.await.unwrap().unwrap());
        assert_ne!(a.id, b.id);

        let books = api.list().await.unwrap();
        assert_eq!(books.len(), 6);
        assert!(books.iter().any(|x| x.title == "Dune"));
        assert!(books.iter().any(|x| x.title == "Hyperion"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_latency_is_applied() {
        let api = CatalogApi::new(Arc::new(MemoryStore::new()));

        let started = tokio::time::Instant::now();
        api.list().await.unwrap();
        assert!(started.elapsed() >= DEFAULT_LATENCY);
    }

    #[tokio::test]
    async fn test_corrupt_blob_is_a_data_error() {
        let store = Arc::new(MemoryStore::new());
        store.set("books", "not json".to_string()).await.unwrap();

        let api = CatalogApi::with_latency(store, Duration::ZERO);
        assert!(matches!(
            api.list().await.unwrap_err(),
            CatalogError::Data(_)
        ));
    }
}
