//! Domain records persisted by the flat-file stores.
//!
//! # Responsibility
//! - Define the three record shapes (hotel, customer, reservation) and their
//!   constructors.
//! - Define the `Record` contract the generic store relies on.
//!
//! # Invariants
//! - Every record carries one `u32` primary key, assigned by the caller.
//! - Cross-record references (`Reservation::hotel_id`, `::customer_id`) are
//!   soft: nothing validates that the referenced key exists.

pub mod customer;
pub mod hotel;
pub mod reservation;

pub use customer::Customer;
pub use hotel::Hotel;
pub use reservation::Reservation;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Contract every persistable record type implements.
///
/// The generic store keys collections by the stringified primary key, so the
/// only identity requirement is a stable `u32` per record.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Short tag used in diagnostic log lines (`kind=hotel`).
    const KIND: &'static str;
    /// Default file name for this record type's collection.
    const FILE_BASENAME: &'static str;
    /// Primary key of this record within its collection.
    fn key(&self) -> u32;
}
