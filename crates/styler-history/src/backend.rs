//! Storage backends for the history store
//!
//! A backend persists one opaque string slot. The file-backed variant
//! writes atomically: content lands in a temp file in the destination
//! directory, is synced, then renamed over the target, so a crash never
//! leaves a half-written history behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// A single persisted slot of serialized history
pub trait StorageBackend: Send + Sync {
    /// Read the slot; `None` when nothing has been stored yet
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the slot exists but cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the slot contents
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the write fails.
    fn store(&self, contents: &str) -> Result<(), StorageError>;
}

/// File-backed storage with atomic replacement
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonFileBackend {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn store(&self, contents: &str) -> Result<(), StorageError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent)?;

        let mut temp = tempfile::NamedTempFile::new_in(parent)?;
        temp.write_all(contents.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path)
            .map_err(|e| StorageError::Io(e.error))?;
        Ok(())
    }
}

/// In-memory storage, used by tests and ephemeral sessions
///
/// Writes can be armed to fail, which simulates an exhausted quota
/// without touching the filesystem.
#[derive(Default)]
pub struct MemoryBackend {
    slot: std::sync::Mutex<Option<String>>,
    fail_writes: std::sync::atomic::AtomicBool,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `store` call fail
    pub fn arm_write_failure(&self) {
        self.fail_writes
            .store(true, std::sync::atomic::Ordering::SeqCst);
    }

    /// Restore normal write behavior
    pub fn disarm_write_failure(&self) {
        self.fail_writes
            .store(false, std::sync::atomic::Ordering::SeqCst);
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.lock().expect("slot lock poisoned").clone())
    }

    fn store(&self, contents: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(StorageError::Rejected("write failure armed".to_string()));
        }
        *self.slot.lock().expect("slot lock poisoned") = Some(contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_backend_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("history.json"));
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("history.json"));

        backend.store("[1,2,3]").unwrap();
        assert_eq!(backend.load().unwrap().as_deref(), Some("[1,2,3]"));

        backend.store("[]").unwrap();
        assert_eq!(backend.load().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_backend_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("nested/deep/history.json"));

        backend.store("[]").unwrap();
        assert_eq!(backend.load().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_backend_armed_failure() {
        let backend = MemoryBackend::new();
        backend.store("first").unwrap();

        backend.arm_write_failure();
        assert!(matches!(
            backend.store("second"),
            Err(StorageError::Rejected(_))
        ));
        // The slot keeps its last successful contents.
        assert_eq!(backend.load().unwrap().as_deref(), Some("first"));

        backend.disarm_write_failure();
        backend.store("third").unwrap();
        assert_eq!(backend.load().unwrap().as_deref(), Some("third"));
    }
}
