//! Reservation record.

use super::Record;
use serde::{Deserialize, Serialize};

/// One reservation entry in `reservations.json`.
///
/// `hotel_id` and `customer_id` are soft references: they are written as-is
/// and may point at keys that no longer exist (or never existed) in the
/// sibling collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Caller-assigned primary key.
    pub reservation_id: u32,
    pub hotel_id: u32,
    pub customer_id: u32,
}

impl Reservation {
    /// Creates an in-memory reservation record. Referenced hotel and
    /// customer keys are not checked against their collections.
    pub fn new(reservation_id: u32, hotel_id: u32, customer_id: u32) -> Self {
        Self {
            reservation_id,
            hotel_id,
            customer_id,
        }
    }
}

impl Record for Reservation {
    const KIND: &'static str = "reservation";
    const FILE_BASENAME: &'static str = "reservations.json";

    fn key(&self) -> u32 {
        self.reservation_id
    }
}
