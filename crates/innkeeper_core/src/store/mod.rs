//! Flat-file persistence layer.
//!
//! # Responsibility
//! - Provide one generic keyed-collection store over a pluggable backend.
//! - Keep encoding details (JSON object keyed by stringified id) inside this
//!   boundary.
//!
//! # Invariants
//! - Every operation re-reads the full collection; there is no cache.
//! - A save fully replaces the entry for its key (last write wins).
//! - A corrupt collection is never silently overwritten: mutating operations
//!   surface `StoreError::Corrupt` instead of rewriting the file.

pub mod backend;
pub mod record_store;

pub use backend::{FileBackend, MemoryBackend, StoreBackend};
pub use record_store::RecordStore;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by store operations.
///
/// Missing keys on delete/modify are not errors; those operations report
/// `Ok(false)` instead. Callers that want the legacy degrade-to-empty read
/// behavior use `RecordStore::load_all_or_default`.
#[derive(Debug)]
pub enum StoreError {
    /// Backend read or write failed.
    Io {
        context: String,
        source: std::io::Error,
    },
    /// Stored content is not a valid JSON object of records.
    Corrupt {
        store: String,
        source: serde_json::Error,
    },
    /// A collection could not be serialized for writing.
    Encode {
        store: String,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { context, source } => write!(f, "{context}: {source}"),
            Self::Corrupt { store, source } => {
                write!(f, "corrupt collection in `{store}`: {source}")
            }
            Self::Encode { store, source } => {
                write!(f, "failed to encode collection for `{store}`: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Corrupt { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source),
        }
    }
}
