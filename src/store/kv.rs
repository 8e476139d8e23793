//! Key-value stores backing the project repository

use std::collections::HashMap;
use std::fs;

use parking_lot::RwLock;

use crate::utils::{atomic_write, cleanup_temp_files};

use super::config::StoreConfig;
use super::error::StoreResult;

/// Durable string key-value store
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete `key`; deleting a missing key is not an error
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Volatile store for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// Store keeping one JSON file per key in a data directory
#[derive(Debug)]
pub struct FileStore {
    config: StoreConfig,
}

impl FileStore {
    /// Open the store, creating the directory and removing stale temp files
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        fs::create_dir_all(config.data_dir())?;

        let cleaned = cleanup_temp_files(config.data_dir())?;
        if cleaned > 0 {
            tracing::warn!(cleaned, dir = %config.data_dir().display(), "Removed leftover temp files");
        }

        Ok(Self { config })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.config.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        atomic_write(self.config.key_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.config.key_path(key);

        if path.exists() {
            fs::remove_file(path)?;
        }

        Ok(())
    }
}
