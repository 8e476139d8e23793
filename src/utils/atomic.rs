//! Atomic file operations
//!
//! Store files are written to a `.tmp` sibling, synced, then renamed over
//! the destination. A crash leaves either the old or the new file, never a
//! partial one.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Atomically replace the file at `path` with `content`
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Remove `.tmp` files left behind by interrupted writes
pub fn cleanup_temp_files<P: AsRef<Path>>(dir: P) -> io::Result<usize> {
    let dir = dir.as_ref();
    let mut cleaned = 0;

    if !dir.exists() {
        return Ok(0);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.extension().map(|e| e == "tmp").unwrap_or(false) {
            fs::remove_file(&path)?;
            cleaned += 1;
        }
    }

    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("projects.json");

        atomic_write(&path, "[]").unwrap();
        atomic_write(&path, "[{\"id\":\"p1\"}]").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[{\"id\":\"p1\"}]");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_atomic_write_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("data.json");

        atomic_write(&path, "{}").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_cleanup_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.tmp"), "partial").unwrap();
        fs::write(temp_dir.path().join("b.json"), "{}").unwrap();

        let cleaned = cleanup_temp_files(temp_dir.path()).unwrap();

        assert_eq!(cleaned, 1);
        assert!(temp_dir.path().join("b.json").exists());
        assert!(!temp_dir.path().join("a.tmp").exists());
    }
}
