//! File-backed storage on redb, the persistent counterpart of
//! [`MemoryBackend`](crate::MemoryBackend).

use std::path::Path;
use std::sync::Arc;

use redb::{Database, TableDefinition};

use crate::backend::StorageBackend;
use crate::error::DbError;

const TABLE: TableDefinition<&str, &str> = TableDefinition::new("oficina");

fn storage_err(e: impl std::fmt::Display) -> DbError {
    DbError::Storage(e.to_string())
}

/// Key-value backend persisted in a single redb file.
#[derive(Clone)]
pub struct RedbBackend {
    db: Arc<Database>,
}

impl RedbBackend {
    /// Open or create a redb database at the given path.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let db = Database::create(path).map_err(storage_err)?;

        let write_txn = db.begin_write().map_err(storage_err)?;
        {
            let _table = write_txn.open_table(TABLE).map_err(storage_err)?;
        }
        write_txn.commit().map_err(storage_err)?;

        tracing::info!(path = %path.display(), "opened redb storage");
        Ok(Self { db: Arc::new(db) })
    }
}

impl StorageBackend for RedbBackend {
    fn get(&self, key: &str) -> Result<Option<String>, DbError> {
        let read_txn = self.db.begin_read().map_err(storage_err)?;
        let table = read_txn.open_table(TABLE).map_err(storage_err)?;

        match table.get(key) {
            Ok(Some(val)) => Ok(Some(val.value().to_string())),
            Ok(None) => Ok(None),
            Err(e) => Err(storage_err(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DbError> {
        let write_txn = self.db.begin_write().map_err(storage_err)?;
        {
            let mut table = write_txn.open_table(TABLE).map_err(storage_err)?;
            table.insert(key, value).map_err(storage_err)?;
        }
        write_txn.commit().map_err(storage_err)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DbError> {
        let write_txn = self.db.begin_write().map_err(storage_err)?;
        {
            let mut table = write_txn.open_table(TABLE).map_err(storage_err)?;
            table.remove(key).map_err(storage_err)?;
        }
        write_txn.commit().map_err(storage_err)?;
        Ok(())
    }

    fn keys(&self, prefix: &str) -> Result<Vec<String>, DbError> {
        let read_txn = self.db.begin_read().map_err(storage_err)?;
        let table = read_txn.open_table(TABLE).map_err(storage_err)?;

        let mut keys = Vec::new();
        let iter = table.range(prefix..).map_err(storage_err)?;
        for entry in iter {
            let (key, _) = entry.map_err(storage_err)?;
            let key = key.value().to_string();
            if !key.starts_with(prefix) {
                break;
            }
            keys.push(key);
        }
        Ok(keys)
    }
}
