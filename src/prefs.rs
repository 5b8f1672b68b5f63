//! User preference persistence
//!
//! Preferences live next to the catalog blob in the same store but are
//! written directly, with no simulated latency: preference writes happen
//! synchronously, outside the mock API and its error taxonomy.

use crate::storage::{KeyValueStore, StorageResult};
use crate::types::Theme;
use std::sync::Arc;

/// Store key holding the plain theme string
const THEME_KEY: &str = "theme";

/// Typed accessor for persisted user preferences
#[derive(Clone)]
pub struct Preferences {
    store: Arc<dyn KeyValueStore>,
}

impl Preferences {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the persisted theme, defaulting to `Theme::System`
    pub async fn theme(&self) -> StorageResult<Theme> {
        let stored = self.store.get(THEME_KEY).await?;
        Ok(stored
            .as_deref()
            .map(Theme::from_stored)
            .unwrap_or_default())
    }

    /// Persist the theme as its plain string form
    pub async fn set_theme(&self, theme: Theme) -> StorageResult<()> {
        self.store.set(THEME_KEY, theme.as_str().to_string()).await
    }
}
