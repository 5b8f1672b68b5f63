//! The catalog record and its input forms

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// One catalog entry
///
/// Identity is the `id`, assigned by the backend on creation. The whole
/// collection is persisted atomically as one JSON array of these records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique identifier, assigned by the backend
    pub id: u64,

    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Price, always positive
    pub price: f64,
}

impl Book {
    pub fn new(id: u64, title: impl Into<String>, author: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            price,
        }
    }
}

/// Creation input: a book without an id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub price: f64,
}

impl BookDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            price,
        }
    }

    /// Attach the backend-assigned id
    pub(crate) fn into_book(self, id: u64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            price: self.price,
        }
    }
}

/// Raw form input as collected from the user, price still text
#[derive(Debug, Clone, Default)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub price: String,
}

impl BookForm {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            price: price.into(),
        }
    }

    /// Validate the form and produce a creation draft
    ///
    /// Rejects blank title or author and any price that is not a finite
    /// number greater than zero.
    pub fn parse(&self) -> Result<BookDraft, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let author = self.author.trim();
        if author.is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidPrice(self.price.clone()))?;
        if !price.is_finite() || price <= 0.0 {
            return Err(ValidationError::InvalidPrice(self.price.clone()));
        }

        Ok(BookDraft::new(title, author, price))
    }
}
