//! Worksheet implementation of [`ClientRepository`].

use std::sync::Arc;

use oficina_core::error::OficinaResult;
use oficina_core::models::client::Client;
use oficina_core::repository::ClientRepository;

use super::table::SheetTable;
use crate::backend::StorageBackend;
use crate::store::DataStore;

#[derive(Clone)]
pub struct SheetClientRepository<B: StorageBackend> {
    table: SheetTable<Client, B>,
}

impl<B: StorageBackend> SheetClientRepository<B> {
    pub fn new(store: Arc<DataStore<B>>) -> Self {
        Self {
            table: SheetTable::new(store),
        }
    }
}

impl<B: StorageBackend> ClientRepository for SheetClientRepository<B> {
    async fn list(&self) -> OficinaResult<Vec<Client>> {
        Ok(self.table.list())
    }

    async fn find_by_national_id(&self, national_id: &str) -> OficinaResult<Option<Client>> {
        Ok(self.table.find(|c| c.cpf == national_id))
    }
}
