//! Key-value implementation of [`ActivityLogRepository`].
//!
//! The whole log is one JSON array, newest entry first, truncated to
//! the configured capacity on every append.

use std::sync::Arc;

use oficina_core::clock::Clock;
use oficina_core::error::OficinaResult;
use oficina_core::models::activity::{ActivityLogEntry, CreateActivityLogEntry};
use oficina_core::repository::{
    ActivityLogFilter, ActivityLogRepository, PaginatedResult, Pagination,
};
use uuid::Uuid;

use crate::backend::StorageBackend;
use crate::store::DataStore;

/// Storage key of the activity log.
pub const ACTIVITY_LOG_KEY: &str = "activity:log";

pub struct StoreActivityLog<B: StorageBackend> {
    store: Arc<DataStore<B>>,
    clock: Arc<dyn Clock>,
    capacity: usize,
}

impl<B: StorageBackend> Clone for StoreActivityLog<B> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            capacity: self.capacity,
        }
    }
}

impl<B: StorageBackend> StoreActivityLog<B> {
    pub fn new(store: Arc<DataStore<B>>, clock: Arc<dyn Clock>, capacity: usize) -> Self {
        Self {
            store,
            clock,
            capacity,
        }
    }

    fn entries(&self) -> OficinaResult<Vec<ActivityLogEntry>> {
        Ok(self
            .store
            .load_json::<Vec<ActivityLogEntry>>(ACTIVITY_LOG_KEY)?
            .unwrap_or_default())
    }
}

impl<B: StorageBackend> ActivityLogRepository for StoreActivityLog<B> {
    async fn append(&self, input: CreateActivityLogEntry) -> OficinaResult<ActivityLogEntry> {
        let entry = ActivityLogEntry {
            id: Uuid::new_v4(),
            actor_id: input.actor_id,
            actor_name: input.actor_name,
            action: input.action,
            details: input.details,
            timestamp: self.clock.now(),
            module: input.module,
        };

        let mut entries = self.entries()?;
        entries.insert(0, entry.clone());
        entries.truncate(self.capacity);
        self.store.save_json(ACTIVITY_LOG_KEY, &entries)?;

        Ok(entry)
    }

    async fn list(
        &self,
        filter: ActivityLogFilter,
        pagination: Pagination,
    ) -> OficinaResult<PaginatedResult<ActivityLogEntry>> {
        let matching: Vec<ActivityLogEntry> = self
            .entries()?
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect();
        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(pagination.offset as usize)
            .take(pagination.limit as usize)
            .collect();

        Ok(PaginatedResult {
            items,
            total,
            offset: pagination.offset,
            limit: pagination.limit,
        })
    }

    async fn clear(&self) -> OficinaResult<()> {
        self.store.remove(ACTIVITY_LOG_KEY)?;
        Ok(())
    }
}
