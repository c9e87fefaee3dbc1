//! Use-case services over the persistence repos.
//!
//! # Responsibility
//! - Bundle the three entity repos behind booking-oriented entry points.
//! - Keep callers away from per-collection wiring.
//!
//! # Invariants
//! - Services never add coordination the stores do not have: writes to
//!   different collections remain independent and uncoordinated.

pub mod booking_service;

pub use booking_service::BookingService;
