use innkeeper_core::{Reservation, ReservationRepo};

#[test]
fn save_and_load_round_trip() {
    let repo = ReservationRepo::in_memory();

    repo.save(&Reservation::new(1, 1, 1)).unwrap();

    let reservations = repo.load_all().unwrap();
    assert!(reservations.contains_key("1"));
    assert_eq!(reservations["1"], Reservation::new(1, 1, 1));
}

#[test]
fn dangling_references_are_persisted_as_is() {
    let repo = ReservationRepo::in_memory();

    // Neither hotel 404 nor customer 500 exists anywhere; the store does
    // not care.
    repo.save(&Reservation::new(9, 404, 500)).unwrap();

    let loaded = repo.load(9).unwrap().unwrap();
    assert_eq!(loaded.hotel_id, 404);
    assert_eq!(loaded.customer_id, 500);
}

#[test]
fn modify_repoints_hotel_and_customer_keys() {
    let repo = ReservationRepo::in_memory();

    repo.save(&Reservation::new(1, 1, 1)).unwrap();
    assert!(repo.modify(1, 2, 3).unwrap());

    let loaded = repo.load(1).unwrap().unwrap();
    assert_eq!(loaded, Reservation::new(1, 2, 3));

    assert!(!repo.modify(55, 1, 1).unwrap());
}

#[test]
fn delete_is_idempotent_from_the_callers_view() {
    let repo = ReservationRepo::in_memory();

    repo.save(&Reservation::new(1, 1, 1)).unwrap();
    assert!(repo.delete(1).unwrap());
    assert!(!repo.delete(1).unwrap());
    assert!(!repo.load_all().unwrap().contains_key("1"));
}
