//! Flat-file record keeping for hotels, customers and reservations.
//!
//! One JSON file per record type, full-file read-modify-write per operation.
//! Built for single-process, low-volume use: there is no file locking, no
//! atomic replace and no cross-file transaction.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{Customer, Hotel, Record, Reservation};
pub use repo::{CustomerRepo, HotelRepo, ReservationRepo};
pub use service::BookingService;
pub use store::{
    FileBackend, MemoryBackend, RecordStore, StoreBackend, StoreError, StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
