//! Hotel record.

use super::Record;
use serde::{Deserialize, Serialize};

/// One hotel entry in `hotels.json`.
///
/// Field names match the persisted JSON shape exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    /// Caller-assigned primary key.
    pub hotel_id: u32,
    pub name: String,
    pub location: String,
    /// Total room count; not decremented by bookings.
    pub rooms: u32,
    /// Reservation keys attached to this hotel. Persisted for schema
    /// compatibility; nothing in the store populates it.
    pub reservations: Vec<u32>,
}

impl Hotel {
    /// Creates an in-memory hotel record. Nothing is persisted until
    /// the record is handed to a store.
    pub fn new(hotel_id: u32, name: impl Into<String>, location: impl Into<String>, rooms: u32) -> Self {
        Self {
            hotel_id,
            name: name.into(),
            location: location.into(),
            rooms,
            reservations: Vec::new(),
        }
    }
}

impl Record for Hotel {
    const KIND: &'static str = "hotel";
    const FILE_BASENAME: &'static str = "hotels.json";

    fn key(&self) -> u32 {
        self.hotel_id
    }
}
