use innkeeper_core::{Customer, CustomerRepo};

#[test]
fn save_and_load_by_stringified_key() {
    let repo = CustomerRepo::in_memory();

    repo.save(&Customer::new(1, "John Doe", "johndoe@example.com"))
        .unwrap();
    repo.save(&Customer::new(2, "Jane Doe", "janedoe@example.com"))
        .unwrap();

    let customers = repo.load_all().unwrap();
    assert_eq!(customers.len(), 2);
    assert!(customers.contains_key("1"));
    assert!(customers.contains_key("2"));
    assert_eq!(customers["2"].email, "janedoe@example.com");
}

#[test]
fn modify_updates_name_and_email_in_place() {
    let repo = CustomerRepo::in_memory();

    repo.save(&Customer::new(1, "John Doe", "johndoe@example.com"))
        .unwrap();
    assert!(repo.modify(1, "Jane Doe", "janedoe@example.com").unwrap());

    let customer = repo.load(1).unwrap().unwrap();
    assert_eq!(customer.customer_id, 1);
    assert_eq!(customer.name, "Jane Doe");
    assert_eq!(customer.email, "janedoe@example.com");
}

#[test]
fn modify_on_missing_key_leaves_the_collection_unchanged() {
    let repo = CustomerRepo::in_memory();

    repo.save(&Customer::new(1, "John Doe", "johndoe@example.com"))
        .unwrap();
    let before = repo.load_all().unwrap();

    assert!(!repo.modify(99, "Nobody", "nobody@example.com").unwrap());
    assert_eq!(repo.load_all().unwrap(), before);
}

#[test]
fn delete_then_load_all_no_longer_contains_the_key() {
    let repo = CustomerRepo::in_memory();

    repo.save(&Customer::new(7, "John Doe", "johndoe@example.com"))
        .unwrap();
    assert!(repo.delete(7).unwrap());
    assert!(repo.load_all().unwrap().is_empty());
}
