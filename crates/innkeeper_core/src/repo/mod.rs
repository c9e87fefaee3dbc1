//! Per-entity persistence APIs.
//!
//! # Responsibility
//! - Expose one typed handle per record type over the generic store.
//! - Pin down the field set each entity's `modify` overwrites.
//!
//! # Invariants
//! - All three repos share the generic store's semantics: whole-record save,
//!   no-write no-op on missing keys, corrupt collections never clobbered.

pub mod customer_repo;
pub mod hotel_repo;
pub mod reservation_repo;

pub use customer_repo::CustomerRepo;
pub use hotel_repo::HotelRepo;
pub use reservation_repo::ReservationRepo;
