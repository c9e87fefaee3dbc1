//! Generic keyed-collection store.
//!
//! # Responsibility
//! - Implement the load/save/delete/modify cycle shared by all record types.
//! - Map backend and decode failures to semantic `StoreError` values.
//!
//! # Invariants
//! - Collections are JSON objects mapping stringified keys to full records.
//! - `save` replaces the whole entry for its key; `update` rewrites only the
//!   fields the caller's closure touches.
//! - Operations on a missing key perform no write.

use crate::model::Record;
use crate::store::backend::{FileBackend, MemoryBackend, StoreBackend};
use crate::store::{StoreError, StoreResult};
use log::error;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Persistence handle for one record type over one backend.
///
/// Stateless between calls: every operation re-reads the backend, so two
/// handles over the same file observe each other's writes (and can clobber
/// each other — see module invariants).
pub struct RecordStore<T: Record, B: StoreBackend = FileBackend> {
    backend: B,
    _record: PhantomData<T>,
}

impl<T: Record> RecordStore<T, FileBackend> {
    /// Store backed by `T`'s default file name inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(FileBackend::new(dir.as_ref().join(T::FILE_BASENAME)))
    }

    /// Store backed by an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self::new(FileBackend::new(path))
    }
}

impl<T: Record> RecordStore<T, MemoryBackend> {
    /// Store backed by ephemeral in-memory storage.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }
}

impl<T: Record, B: StoreBackend> RecordStore<T, B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            _record: PhantomData,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Loads the full collection keyed by stringified record key.
    ///
    /// # Contract
    /// - Missing storage is initialized to an empty collection and an empty
    ///   map is returned.
    /// - Unreadable storage returns `StoreError::Io`; content that is not a
    ///   JSON object of records returns `StoreError::Corrupt`.
    pub fn load_all(&self) -> StoreResult<BTreeMap<String, T>> {
        let raw = self.backend.read_or_init().map_err(|source| StoreError::Io {
            context: format!(
                "reading {} collection from `{}`",
                T::KIND,
                self.backend.describe()
            ),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            store: self.backend.describe(),
            source,
        })
    }

    /// Loads the full collection, degrading any failure to an empty map.
    ///
    /// Emits one diagnostic log line per failed load. Prefer `load_all` when
    /// the caller needs to tell "empty" apart from "unreadable".
    pub fn load_all_or_default(&self) -> BTreeMap<String, T> {
        match self.load_all() {
            Ok(records) => records,
            Err(err) => {
                error!(
                    "event=store_load module=store status=error kind={} error={}",
                    T::KIND,
                    err
                );
                BTreeMap::new()
            }
        }
    }

    /// Looks up one record by key.
    pub fn load(&self, id: u32) -> StoreResult<Option<T>> {
        Ok(self.load_all()?.remove(&id.to_string()))
    }

    /// Inserts or fully replaces the entry for `record.key()`.
    ///
    /// # Contract
    /// - The saved entry replaces any prior entry for the same key; no field
    ///   of the old entry survives.
    /// - Propagates `Corrupt` rather than rewriting over a collection it
    ///   could not decode.
    pub fn save(&self, record: &T) -> StoreResult<()> {
        let mut records = self.load_all()?;
        records.insert(record.key().to_string(), record.clone());
        self.write_all(&records)
    }

    /// Removes the entry for `id`.
    ///
    /// Returns `Ok(true)` when an entry was removed and the collection
    /// rewritten, `Ok(false)` when the key was absent (no write happens).
    pub fn delete(&self, id: u32) -> StoreResult<bool> {
        let mut records = self.load_all()?;
        if records.remove(&id.to_string()).is_none() {
            return Ok(false);
        }
        self.write_all(&records)?;
        Ok(true)
    }

    /// Applies an in-place edit to the entry for `id`.
    ///
    /// Fields the closure does not touch keep their stored values. Returns
    /// `Ok(false)` when the key is absent (no write happens).
    pub fn update<F>(&self, id: u32, apply: F) -> StoreResult<bool>
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.load_all()?;
        let Some(record) = records.get_mut(&id.to_string()) else {
            return Ok(false);
        };
        apply(record);
        self.write_all(&records)?;
        Ok(true)
    }

    fn write_all(&self, records: &BTreeMap<String, T>) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(records).map_err(|source| StoreError::Encode {
            store: self.backend.describe(),
            source,
        })?;
        self.backend.write(&raw).map_err(|source| StoreError::Io {
            context: format!(
                "writing {} collection to `{}`",
                T::KIND,
                self.backend.describe()
            ),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RecordStore;
    use crate::model::Customer;
    use crate::store::backend::MemoryBackend;
    use crate::store::StoreError;

    #[test]
    fn update_on_missing_key_performs_no_write() {
        let store: RecordStore<Customer, MemoryBackend> = RecordStore::in_memory();
        let before = store.backend().contents();

        let changed = store.update(7, |c| c.name = "nobody".to_string()).unwrap();

        assert!(!changed);
        assert_eq!(store.backend().contents(), before);
    }

    #[test]
    fn corrupt_contents_surface_as_corrupt_error() {
        let store: RecordStore<Customer, MemoryBackend> =
            RecordStore::new(MemoryBackend::with_contents("not json at all"));

        let err = store.load_all().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn non_object_contents_surface_as_corrupt_error() {
        let store: RecordStore<Customer, MemoryBackend> =
            RecordStore::new(MemoryBackend::with_contents("[1, 2, 3]"));

        let err = store.load_all().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn load_all_or_default_degrades_to_empty() {
        let store: RecordStore<Customer, MemoryBackend> =
            RecordStore::new(MemoryBackend::with_contents("{broken"));

        assert!(store.load_all_or_default().is_empty());
    }

    #[test]
    fn save_refuses_to_clobber_corrupt_collection() {
        let store: RecordStore<Customer, MemoryBackend> =
            RecordStore::new(MemoryBackend::with_contents("{broken"));

        let err = store
            .save(&Customer::new(1, "John Doe", "johndoe@example.com"))
            .unwrap_err();

        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert_eq!(store.backend().contents(), "{broken");
    }
}
