//! Worksheet implementation of [`AdminRepository`].

use std::sync::Arc;

use oficina_core::error::OficinaResult;
use oficina_core::models::admin::Admin;
use oficina_core::repository::AdminRepository;

use super::table::SheetTable;
use crate::backend::StorageBackend;
use crate::store::DataStore;

#[derive(Clone)]
pub struct SheetAdminRepository<B: StorageBackend> {
    table: SheetTable<Admin, B>,
}

impl<B: StorageBackend> SheetAdminRepository<B> {
    pub fn new(store: Arc<DataStore<B>>) -> Self {
        Self {
            table: SheetTable::new(store),
        }
    }
}

impl<B: StorageBackend> AdminRepository for SheetAdminRepository<B> {
    async fn find_by_username(&self, username: &str) -> OficinaResult<Vec<Admin>> {
        Ok(self.table.filter(|a| a.username == username))
    }
}
