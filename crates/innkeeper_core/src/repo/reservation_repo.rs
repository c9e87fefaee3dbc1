//! Reservation persistence handle.

use crate::model::Reservation;
use crate::store::{FileBackend, MemoryBackend, RecordStore, StoreBackend, StoreResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Typed store for the `reservations.json` collection.
///
/// Reservations reference hotel and customer keys softly; this repo never
/// consults the sibling collections, so dangling references persist fine.
pub struct ReservationRepo<B: StoreBackend = FileBackend> {
    store: RecordStore<Reservation, B>,
}

impl ReservationRepo<FileBackend> {
    /// Repo over `reservations.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(RecordStore::in_dir(dir))
    }

    /// Repo over an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self::new(RecordStore::at_path(path))
    }
}

impl ReservationRepo<MemoryBackend> {
    pub fn in_memory() -> Self {
        Self::new(RecordStore::in_memory())
    }
}

impl<B: StoreBackend> ReservationRepo<B> {
    pub fn new(store: RecordStore<Reservation, B>) -> Self {
        Self { store }
    }

    /// Inserts or fully replaces the entry for `reservation.reservation_id`.
    pub fn save(&self, reservation: &Reservation) -> StoreResult<()> {
        self.store.save(reservation)
    }

    pub fn load_all(&self) -> StoreResult<BTreeMap<String, Reservation>> {
        self.store.load_all()
    }

    pub fn load(&self, reservation_id: u32) -> StoreResult<Option<Reservation>> {
        self.store.load(reservation_id)
    }

    /// Removes a reservation; `Ok(false)` when the key was absent.
    pub fn delete(&self, reservation_id: u32) -> StoreResult<bool> {
        self.store.delete(reservation_id)
    }

    /// Repoints an existing reservation at different hotel/customer keys.
    /// The new keys are not validated against the sibling collections.
    ///
    /// Returns `Ok(false)` when the key is absent (no write happens).
    pub fn modify(
        &self,
        reservation_id: u32,
        hotel_id: u32,
        customer_id: u32,
    ) -> StoreResult<bool> {
        self.store.update(reservation_id, |reservation| {
            reservation.hotel_id = hotel_id;
            reservation.customer_id = customer_id;
        })
    }
}
