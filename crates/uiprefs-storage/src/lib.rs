//! uiprefs Storage Layer
//!
//! Durable per-user defaults: scalar integers and integer sequences keyed by name.
//! The SQLite store is what ships; the in-memory store backs tests.

mod database;
mod error;
mod memory;
mod migrations;
mod store;

pub use database::SqliteStore;
pub use error::StorageError;
pub use memory::MemoryStore;
pub use store::{DefaultsStore, StoredValue};

pub type Result<T> = std::result::Result<T, StorageError>;
