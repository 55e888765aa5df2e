//! Persistence for review progress
//!
//! Progress lives in one key-value slot holding the whole store as JSON:
//! ```text
//! {data_dir}/
//! └── {storage_key}.json   # {"<id>": {"id", "stageIndex", "nextReviewDate"}, ...}
//! ```
//! Every update is a read-modify-write of the entire value.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::models::ProgressStore;

/// Default key for the progress slot
pub const PROGRESS_KEY: &str = "ebb_vocab_progress";

#[derive(Error, Debug)]
pub enum ProgressStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, ProgressStorageError>;

/// Durable string slots addressed by key
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the entire value under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// One JSON file per key inside a directory
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(base_path: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Get the file path backing a key
    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(ProgressStorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

/// In-process store, mainly for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Reads and writes the whole progress store under one key
pub struct ProgressStorage<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ProgressStorage<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, PROGRESS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persisted store
    ///
    /// A missing or malformed value loads as an empty store.
    pub fn load(&self) -> Result<ProgressStore> {
        let Some(content) = self.store.get(&self.key)? else {
            return Ok(ProgressStore::new());
        };

        match serde_json::from_str(&content) {
            Ok(progress) => Ok(progress),
            Err(e) => {
                log::warn!("Discarding unreadable progress under '{}': {}", self.key, e);
                Ok(ProgressStore::new())
            }
        }
    }

    /// Replace the persisted store
    pub fn save(&self, progress: &ProgressStore) -> Result<()> {
        self.store.set(&self.key, &serde_json::to_string(progress)?)
    }
}
