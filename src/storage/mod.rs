//! Key-value text storage, the local-storage analog

use crate::error::StorageError;
use async_trait::async_trait;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Abstract key-value text store
///
/// The persistence substrate the catalog API writes through. Absent keys are
/// `Ok(None)`, never an error; the first reader is expected to seed them.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under the given key, if any
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store a value under the given key, replacing any previous value
    async fn set(&self, key: &str, value: String) -> StorageResult<()>;
}

/// In-memory store, the single-session analog of browser local storage
#[derive(Default)]
pub struct MemoryStore {
    data: std::sync::RwLock<std::collections::HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.data.read().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        self.data.write().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}

/// File-backed store: one file per key under a root directory
pub struct LocalStore {
    root: std::path::PathBuf,
}

impl LocalStore {
    /// Create a new file-backed store rooted at the given directory
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a key to a file path, rejecting anything that could escape
    /// the root directory
    fn key_path(&self, key: &str) -> StorageResult<std::path::PathBuf> {
        let safe = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !safe {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl KeyValueStore for LocalStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.key_path(key)?;
        match tokio::fs::read_to_string(path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        let path = self.key_path(key)?;
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(path, value).await?;
        Ok(())
    }
}
