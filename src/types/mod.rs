//! Core catalog types

mod book;
mod theme;

pub use book::{Book, BookDraft, BookForm};
pub use theme::Theme;
