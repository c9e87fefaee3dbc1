//! Booking use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for registering hotels/customers and
//!   placing reservations.
//!
//! # Invariants
//! - Each operation touches exactly one collection; a booking and the hotel
//!   or customer it references are never written in one step.
//! - Soft references stay unvalidated: `book` accepts hotel/customer keys
//!   that do not exist.

use crate::model::{Customer, Hotel, Reservation};
use crate::repo::{CustomerRepo, HotelRepo, ReservationRepo};
use crate::store::{FileBackend, MemoryBackend, StoreBackend, StoreResult};
use std::path::Path;

/// Bundled repos for the booking use cases.
pub struct BookingService<B: StoreBackend = FileBackend> {
    hotels: HotelRepo<B>,
    customers: CustomerRepo<B>,
    reservations: ReservationRepo<B>,
}

impl BookingService<FileBackend> {
    /// Service over the three collection files inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            HotelRepo::in_dir(dir),
            CustomerRepo::in_dir(dir),
            ReservationRepo::in_dir(dir),
        )
    }
}

impl BookingService<MemoryBackend> {
    /// Service over three independent in-memory collections.
    pub fn in_memory() -> Self {
        Self::new(
            HotelRepo::in_memory(),
            CustomerRepo::in_memory(),
            ReservationRepo::in_memory(),
        )
    }
}

impl<B: StoreBackend> BookingService<B> {
    pub fn new(
        hotels: HotelRepo<B>,
        customers: CustomerRepo<B>,
        reservations: ReservationRepo<B>,
    ) -> Self {
        Self {
            hotels,
            customers,
            reservations,
        }
    }

    pub fn hotels(&self) -> &HotelRepo<B> {
        &self.hotels
    }

    pub fn customers(&self) -> &CustomerRepo<B> {
        &self.customers
    }

    pub fn reservations(&self) -> &ReservationRepo<B> {
        &self.reservations
    }

    /// Persists a hotel record (insert or whole-record replace).
    pub fn register_hotel(&self, hotel: &Hotel) -> StoreResult<()> {
        self.hotels.save(hotel)
    }

    /// Persists a customer record (insert or whole-record replace).
    pub fn register_customer(&self, customer: &Customer) -> StoreResult<()> {
        self.customers.save(customer)
    }

    /// Persists a reservation.
    ///
    /// # Contract
    /// - The referenced hotel and customer keys are written as-is, without
    ///   existence checks.
    pub fn book(&self, reservation: &Reservation) -> StoreResult<()> {
        self.reservations.save(reservation)
    }

    /// Removes a reservation; `Ok(false)` when it was already gone.
    pub fn cancel(&self, reservation_id: u32) -> StoreResult<bool> {
        self.reservations.delete(reservation_id)
    }

    /// All reservations pointing at `hotel_id`, by linear scan.
    pub fn reservations_for_hotel(&self, hotel_id: u32) -> StoreResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .load_all()?
            .into_values()
            .filter(|reservation| reservation.hotel_id == hotel_id)
            .collect())
    }
}
