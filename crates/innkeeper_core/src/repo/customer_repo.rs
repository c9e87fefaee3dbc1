//! Customer persistence handle.

use crate::model::Customer;
use crate::store::{FileBackend, MemoryBackend, RecordStore, StoreBackend, StoreResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Typed store for the `customers.json` collection.
pub struct CustomerRepo<B: StoreBackend = FileBackend> {
    store: RecordStore<Customer, B>,
}

impl CustomerRepo<FileBackend> {
    /// Repo over `customers.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(RecordStore::in_dir(dir))
    }

    /// Repo over an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self::new(RecordStore::at_path(path))
    }
}

impl CustomerRepo<MemoryBackend> {
    pub fn in_memory() -> Self {
        Self::new(RecordStore::in_memory())
    }
}

impl<B: StoreBackend> CustomerRepo<B> {
    pub fn new(store: RecordStore<Customer, B>) -> Self {
        Self { store }
    }

    /// Inserts or fully replaces the entry for `customer.customer_id`.
    pub fn save(&self, customer: &Customer) -> StoreResult<()> {
        self.store.save(customer)
    }

    pub fn load_all(&self) -> StoreResult<BTreeMap<String, Customer>> {
        self.store.load_all()
    }

    pub fn load(&self, customer_id: u32) -> StoreResult<Option<Customer>> {
        self.store.load(customer_id)
    }

    /// Removes a customer; `Ok(false)` when the key was absent.
    pub fn delete(&self, customer_id: u32) -> StoreResult<bool> {
        self.store.delete(customer_id)
    }

    /// Overwrites `name` and `email` on an existing customer.
    ///
    /// Returns `Ok(false)` when the key is absent (no write happens).
    pub fn modify(
        &self,
        customer_id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> StoreResult<bool> {
        let name = name.into();
        let email = email.into();
        self.store.update(customer_id, |customer| {
            customer.name = name;
            customer.email = email;
        })
    }
}
