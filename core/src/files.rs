#![deny(missing_docs)]

//! # File Helpers
//!
//! Skip-if-exists writes. Every generated artifact is write-once: an
//! existing file is never overwritten, so repeated regeneration never
//! destroys user-modified output.

use crate::error::AppResult;
use std::fs;
use std::path::Path;

/// Creates the directory (and any missing parents) when absent.
pub fn ensure_dir(dir: &Path) -> AppResult<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Writes `contents` to `path` only when the file does not exist yet.
///
/// Missing parent directories are created. Returns whether a write happened;
/// an existing file is left byte-identical.
pub fn write_if_absent(path: &Path, contents: &str) -> AppResult<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_if_absent_writes_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/config.yaml");

        let wrote = write_if_absent(&path, "first").unwrap();
        assert!(wrote);
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn test_write_if_absent_never_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        assert!(write_if_absent(&path, "original").unwrap());
        let wrote = write_if_absent(&path, "changed").unwrap();
        assert!(!wrote);
        // Second call leaves the file byte-identical.
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_ensure_dir_nested() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Idempotent on an existing directory.
        ensure_dir(&nested).unwrap();
    }
}
