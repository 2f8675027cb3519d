//! The mock data store: named worksheets over a key-value backend.
//!
//! Reads never fail. A missing worksheet is seeded with fixtures, a
//! malformed one is discarded and re-seeded, and an unreachable
//! backend falls back to in-memory defaults so the console stays
//! usable. Writes are last-write-wins with no merge.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::backend::StorageBackend;
use crate::error::DbError;
use crate::fixtures;
use crate::sheet::{Row, Sheet};

/// Storage key of a worksheet.
pub fn sheet_key(table: &str) -> String {
    format!("sheet:{table}")
}

/// Configuration for the data store.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Pepper used when hashing fixture passwords. Must match the
    /// authenticator's pepper.
    pub pepper: Option<String>,
}

pub struct DataStore<B: StorageBackend> {
    backend: B,
    config: StoreConfig,
    /// Worksheets served while the backend is unavailable.
    fallback: RwLock<HashMap<String, Sheet>>,
}

impl<B: StorageBackend> DataStore<B> {
    pub fn new(backend: B, config: StoreConfig) -> Self {
        Self {
            backend,
            config,
            fallback: RwLock::new(HashMap::new()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Data rows of `table`.
    pub fn read(&self, table: &str) -> Vec<Row> {
        self.read_sheet(table).rows
    }

    /// Replace the data rows of `table`, keeping its header.
    pub fn write(&self, table: &str, rows: Vec<Row>) -> Result<(), DbError> {
        let header = match fixtures::header(table) {
            Some(h) => h.iter().map(|c| c.to_string()).collect(),
            None => self.stored_header(table),
        };
        self.write_sheet(table, &Sheet { header, rows })
    }

    pub fn read_sheet(&self, table: &str) -> Sheet {
        let key = sheet_key(table);
        match self.backend.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Sheet>(&raw) {
                Ok(sheet) => sheet,
                Err(e) => {
                    warn!(table, error = %e, "discarding malformed worksheet");
                    if let Err(e) = self.backend.remove(&key) {
                        warn!(table, error = %e, "failed to discard malformed worksheet");
                    }
                    self.seed(table)
                }
            },
            Ok(None) => self.seed(table),
            Err(e) => {
                warn!(table, error = %e, "storage unavailable, serving in-memory defaults");
                self.fallback_sheet(table)
            }
        }
    }

    pub fn write_sheet(&self, table: &str, sheet: &Sheet) -> Result<(), DbError> {
        let raw = serde_json::to_string(sheet)?;
        match self.backend.set(&sheet_key(table), &raw) {
            Ok(()) => {
                self.fallback.write().remove(table);
                debug!(table, rows = sheet.rows.len(), "worksheet written");
                Ok(())
            }
            Err(e) => {
                warn!(table, error = %e, "storage unavailable, keeping worksheet in memory");
                self.fallback.write().insert(table.to_string(), sheet.clone());
                Err(e)
            }
        }
    }

    /// Load a JSON value. Malformed values are discarded and read as
    /// absent.
    pub fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DbError> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, error = %e, "discarding malformed stored value");
                self.backend.remove(key)?;
                Ok(None)
            }
        }
    }

    pub fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), DbError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)
    }

    pub fn remove(&self, key: &str) -> Result<(), DbError> {
        self.backend.remove(key)
    }

    fn defaults(&self, table: &str) -> Sheet {
        match fixtures::default_sheet(table, self.config.pepper.as_deref()) {
            Ok(Some(sheet)) => sheet,
            Ok(None) => Sheet::default(),
            Err(e) => {
                warn!(table, error = %e, "failed to build fixtures, starting empty");
                let header = fixtures::header(table).unwrap_or_default();
                Sheet::new(header, Vec::new())
            }
        }
    }

    fn seed(&self, table: &str) -> Sheet {
        let sheet = self.defaults(table);
        if fixtures::header(table).is_some() {
            match self.write_sheet(table, &sheet) {
                Ok(()) => debug!(table, rows = sheet.rows.len(), "seeded worksheet"),
                Err(e) => warn!(table, error = %e, "seeding failed"),
            }
        }
        sheet
    }

    fn fallback_sheet(&self, table: &str) -> Sheet {
        if let Some(sheet) = self.fallback.read().get(table) {
            return sheet.clone();
        }
        let sheet = self.defaults(table);
        self.fallback
            .write()
            .entry(table.to_string())
            .or_insert(sheet)
            .clone()
    }

    fn stored_header(&self, table: &str) -> Vec<String> {
        self.backend
            .get(&sheet_key(table))
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str::<Sheet>(&raw).ok())
            .map(|sheet| sheet.header)
            .unwrap_or_default()
    }
}
