//! Hotel persistence handle.

use crate::model::Hotel;
use crate::store::{FileBackend, MemoryBackend, RecordStore, StoreBackend, StoreResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Typed store for the `hotels.json` collection.
pub struct HotelRepo<B: StoreBackend = FileBackend> {
    store: RecordStore<Hotel, B>,
}

impl HotelRepo<FileBackend> {
    /// Repo over `hotels.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(RecordStore::in_dir(dir))
    }

    /// Repo over an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self::new(RecordStore::at_path(path))
    }
}

impl HotelRepo<MemoryBackend> {
    pub fn in_memory() -> Self {
        Self::new(RecordStore::in_memory())
    }
}

impl<B: StoreBackend> HotelRepo<B> {
    pub fn new(store: RecordStore<Hotel, B>) -> Self {
        Self { store }
    }

    /// Inserts or fully replaces the entry for `hotel.hotel_id`.
    pub fn save(&self, hotel: &Hotel) -> StoreResult<()> {
        self.store.save(hotel)
    }

    pub fn load_all(&self) -> StoreResult<BTreeMap<String, Hotel>> {
        self.store.load_all()
    }

    pub fn load(&self, hotel_id: u32) -> StoreResult<Option<Hotel>> {
        self.store.load(hotel_id)
    }

    /// Removes a hotel; `Ok(false)` when the key was absent.
    pub fn delete(&self, hotel_id: u32) -> StoreResult<bool> {
        self.store.delete(hotel_id)
    }

    /// Overwrites `name`, `location` and `rooms` on an existing hotel,
    /// leaving `hotel_id` and `reservations` untouched.
    ///
    /// Returns `Ok(false)` when the key is absent (no write happens).
    pub fn modify(
        &self,
        hotel_id: u32,
        name: impl Into<String>,
        location: impl Into<String>,
        rooms: u32,
    ) -> StoreResult<bool> {
        let name = name.into();
        let location = location.into();
        self.store.update(hotel_id, |hotel| {
            hotel.name = name;
            hotel.location = location;
            hotel.rooms = rooms;
        })
    }
}
