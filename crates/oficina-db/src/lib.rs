//! Oficina DB — the key-value mock data store that stands in for the
//! shop's spreadsheet backend.
//!
//! This crate provides:
//! - Storage backends ([`StorageBackend`], [`MemoryBackend`], [`RedbBackend`])
//! - The table store with fixture seeding and degraded fallbacks ([`DataStore`])
//! - Typed row mapping for every worksheet ([`TableRecord`])
//! - Repository implementations for the `oficina-core` traits
//! - Error types ([`DbError`])

mod backend;
mod error;
pub mod fixtures;
mod password;
mod records;
mod redb_backend;
pub mod repository;
mod sheet;
mod store;

pub use backend::{MemoryBackend, SharedBackend, StorageBackend};
pub use error::DbError;
pub use password::hash_password;
pub use redb_backend::RedbBackend;
pub use sheet::{Row, Sheet, TableRecord};
pub use store::{DataStore, StoreConfig, sheet_key};
