//! Typed access to one worksheet.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::warn;

use crate::backend::StorageBackend;
use crate::error::DbError;
use crate::sheet::TableRecord;
use crate::store::DataStore;

/// A worksheet viewed as a list of `R`.
pub struct SheetTable<R: TableRecord, B: StorageBackend> {
    store: Arc<DataStore<B>>,
    _record: PhantomData<fn() -> R>,
}

impl<R: TableRecord, B: StorageBackend> Clone for SheetTable<R, B> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _record: PhantomData,
        }
    }
}

impl<R: TableRecord, B: StorageBackend> SheetTable<R, B> {
    pub fn new(store: Arc<DataStore<B>>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Every row that maps to a record, in stored order. Rows that do
    /// not map are skipped.
    pub fn list(&self) -> Vec<R> {
        self.store
            .read(R::TABLE)
            .iter()
            .enumerate()
            .filter_map(|(i, row)| match R::from_row(row) {
                Ok(record) => Some(record),
                Err(reason) => {
                    let err = DbError::Mapping {
                        table: R::TABLE.to_string(),
                        row: i,
                        reason,
                    };
                    warn!(error = %err, "skipping row");
                    None
                }
            })
            .collect()
    }

    /// First record matching `predicate`, scanning in stored order.
    pub fn find(&self, predicate: impl Fn(&R) -> bool) -> Option<R> {
        self.list().into_iter().find(|r| predicate(r))
    }

    /// Every record matching `predicate`, in stored order.
    pub fn filter(&self, predicate: impl Fn(&R) -> bool) -> Vec<R> {
        self.list().into_iter().filter(|r| predicate(r)).collect()
    }

    /// Replace the whole worksheet with `records`.
    pub fn save_all(&self, records: &[R]) -> Result<(), DbError> {
        self.store
            .write(R::TABLE, records.iter().map(TableRecord::to_row).collect())
    }
}
