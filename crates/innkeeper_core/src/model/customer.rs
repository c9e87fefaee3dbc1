//! Customer record.

use super::Record;
use serde::{Deserialize, Serialize};

/// One customer entry in `customers.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Caller-assigned primary key.
    pub customer_id: u32,
    pub name: String,
    /// Free-form contact address; no format validation is applied.
    pub email: String,
}

impl Customer {
    /// Creates an in-memory customer record.
    pub fn new(customer_id: u32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            customer_id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Record for Customer {
    const KIND: &'static str = "customer";
    const FILE_BASENAME: &'static str = "customers.json";

    fn key(&self) -> u32 {
        self.customer_id
    }
}
