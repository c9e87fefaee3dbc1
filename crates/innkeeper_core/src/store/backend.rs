//! Storage backends for record collections.
//!
//! # Responsibility
//! - Read and rewrite one collection's raw contents.
//! - Initialize empty storage lazily on first read.
//!
//! # Invariants
//! - A missing file backend is created holding an empty collection before the
//!   first read returns.
//! - Writes are plain full-file rewrites; there is no atomic rename or file
//!   lock. Concurrent writers can lose updates.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Serialized form of a collection with no records.
const EMPTY_COLLECTION: &str = "{}";

/// Raw storage contract for one collection.
///
/// Backends move strings, not records; all encoding lives in the store. This
/// keeps the seam small enough that tests can swap in in-memory storage.
pub trait StoreBackend {
    /// Returns the full stored contents, creating empty storage when absent.
    fn read_or_init(&self) -> io::Result<String>;

    /// Replaces the full stored contents.
    fn write(&self, contents: &str) -> io::Result<()>;

    /// Human-readable storage location for diagnostics.
    fn describe(&self) -> String;
}

/// Backend persisting one collection to a single file.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoreBackend for FileBackend {
    fn read_or_init(&self) -> io::Result<String> {
        if !self.path.exists() {
            fs::write(&self.path, EMPTY_COLLECTION)?;
            return Ok(EMPTY_COLLECTION.to_string());
        }
        fs::read_to_string(&self.path)
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        fs::write(&self.path, contents)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Backend holding one collection in memory, for tests and ephemeral use.
pub struct MemoryBackend {
    contents: Mutex<String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::with_contents(EMPTY_COLLECTION)
    }

    /// Starts from caller-provided raw contents, e.g. to simulate a
    /// corrupt collection without touching the filesystem.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(contents.into()),
        }
    }

    /// Snapshot of the current raw contents.
    pub fn contents(&self) -> String {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, String> {
        // A poisoned lock only means a panicking test; the string inside
        // is still valid.
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreBackend for MemoryBackend {
    fn read_or_init(&self) -> io::Result<String> {
        Ok(self.lock().clone())
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        *self.lock() = contents.to_string();
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{FileBackend, MemoryBackend, StoreBackend, EMPTY_COLLECTION};

    #[test]
    fn file_backend_initializes_missing_file_with_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        let backend = FileBackend::new(&path);

        assert_eq!(backend.read_or_init().unwrap(), EMPTY_COLLECTION);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), EMPTY_COLLECTION);
    }

    #[test]
    fn file_backend_rewrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("records.json"));

        backend.write("{\"1\": {}}").unwrap();
        assert_eq!(backend.read_or_init().unwrap(), "{\"1\": {}}");
    }

    #[test]
    fn memory_backend_round_trips_contents() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read_or_init().unwrap(), EMPTY_COLLECTION);

        backend.write("garbage").unwrap();
        assert_eq!(backend.contents(), "garbage");
    }
}
