//! Store configuration

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "SUBTITLE_DATA_DIR";

/// Configuration for the project store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding one JSON file per store key
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl StoreConfig {
    /// Create config with custom data directory
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Resolve the data directory from `SUBTITLE_DATA_DIR`
    ///
    /// Relative paths are resolved against the working directory; without
    /// the variable the store lives in `./data`.
    pub fn from_env() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        let data_dir = match env::var(DATA_DIR_ENV) {
            Ok(path) if !path.trim().is_empty() => {
                let path = PathBuf::from(path);
                if path.is_absolute() {
                    path
                } else {
                    current_dir.join(path)
                }
            }
            _ => current_dir.join("data"),
        };

        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File backing a store key
    ///
    /// Characters outside `[A-Za-z0-9._-]` are replaced so any key maps to
    /// a plain file name.
    pub fn key_path(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        self.data_dir.join(format!("{}.json", file_name))
    }
}
