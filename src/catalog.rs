//! The state controller: owner of the in-memory collection and UI state
//!
//! Presentation code renders from this struct and delegates every mutation to
//! it; nothing else touches the catalog API. Each operation runs a linear
//! transition: idle, then in-flight, then either the local state is
//! reconciled with the API result or a user-visible error message is set,
//! never both. The in-memory and persisted collections converge after every
//! successful operation and may diverge only while one is in flight.

use crate::api::CatalogApi;
use crate::error::ValidationError;
use crate::prefs::Preferences;
use crate::storage::{KeyValueStore, StorageResult};
use crate::types::{Book, BookForm, Theme};
use std::sync::Arc;
use std::time::Duration;

/// Book catalog state controller
pub struct Catalog {
    api: CatalogApi,
    prefs: Preferences,
    books: Vec<Book>,
    loading: bool,
    error: Option<String>,
    editing: Option<Book>,
    theme: Theme,
}

impl Catalog {
    /// Create a controller over the given store with the default simulated
    /// latency, restoring the persisted theme preference
    ///
    /// The collection starts empty; call [`Catalog::load`] to fetch it.
    pub async fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_api(CatalogApi::new(store.clone()), store).await
    }

    /// Create a controller with an explicit simulated latency
    pub async fn with_latency(store: Arc<dyn KeyValueStore>, latency: Duration) -> Self {
        Self::with_api(CatalogApi::with_latency(store.clone(), latency), store).await
    }

    async fn with_api(api: CatalogApi, store: Arc<dyn KeyValueStore>) -> Self {
        let prefs = Preferences::new(store);
        let theme = match prefs.theme().await {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Failed to read theme preference, using default: {}", e);
                Theme::default()
            }
        };
        Self {
            api,
            prefs,
            books: Vec::new(),
            loading: false,
            error: None,
            editing: None,
            theme,
        }
    }

    /// Fetch the collection, replacing the local copy on success
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        match self.api.list().await {
            Ok(books) => self.books = books,
            Err(e) => {
                tracing::warn!("Failed to fetch books: {}", e);
                self.error = Some("Failed to fetch books.".to_string());
            }
        }
        self.loading = false;
    }

    /// Validate form input and create a record
    ///
    /// Invalid input is returned as the user-visible validation message and
    /// makes no backend call; a failed create sets the inline error text.
    pub async fn add(&mut self, form: BookForm) -> Result<(), ValidationError> {
        let draft = form.parse()?;

        match self.api.create(draft).await {
            Ok(book) => self.books.push(book),
            Err(e) => {
                tracing::warn!("Failed to create book: {}", e);
                self.error = Some("Failed to add book.".to_string());
            }
        }
        Ok(())
    }

    /// Save an edited record, replacing the matching local one on success
    pub async fn update(&mut self, book: Book) {
        let id = book.id;
        match self.api.update(book).await {
            Ok(updated) => {
                if let Some(slot) = self.books.iter_mut().find(|b| b.id == updated.id) {
                    *slot = updated;
                }
                self.editing = None;
            }
            Err(e) => {
                tracing::warn!("Failed to update book {}: {}", id, e);
                self.error = Some("Failed to update book.".to_string());
            }
        }
    }

    /// Delete a record, requiring explicit user confirmation
    ///
    /// Without confirmation nothing happens, locally or in the backend.
    pub async fn remove(&mut self, id: u64, confirmed: bool) {
        if !confirmed {
            return;
        }

        match self.api.delete(id).await {
            Ok(()) => self.books.retain(|b| b.id != id),
            Err(e) => {
                tracing::warn!("Failed to delete book {}: {}", id, e);
                self.error = Some("Failed to delete book.".to_string());
            }
        }
    }

    /// Select a record for editing in the modal
    pub fn begin_edit(&mut self, id: u64) {
        self.editing = self.books.iter().find(|b| b.id == id).cloned();
    }

    /// Dismiss the edit selection without saving
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Set and persist the theme preference
    pub async fn set_theme(&mut self, theme: Theme) -> StorageResult<()> {
        self.theme = theme;
        self.prefs.set_theme(theme).await
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn editing(&self) -> Option<&Book> {
        self.editing.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}
