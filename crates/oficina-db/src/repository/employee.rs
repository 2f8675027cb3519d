//! Worksheet implementation of [`EmployeeRepository`].

use std::sync::Arc;

use oficina_core::error::OficinaResult;
use oficina_core::models::employee::Employee;
use oficina_core::repository::EmployeeRepository;

use super::table::SheetTable;
use crate::backend::StorageBackend;
use crate::store::DataStore;

#[derive(Clone)]
pub struct SheetEmployeeRepository<B: StorageBackend> {
    table: SheetTable<Employee, B>,
}

impl<B: StorageBackend> SheetEmployeeRepository<B> {
    pub fn new(store: Arc<DataStore<B>>) -> Self {
        Self {
            table: SheetTable::new(store),
        }
    }
}

impl<B: StorageBackend> EmployeeRepository for SheetEmployeeRepository<B> {
    async fn list(&self) -> OficinaResult<Vec<Employee>> {
        Ok(self.table.list())
    }

    async fn find_by_username(&self, username: &str) -> OficinaResult<Vec<Employee>> {
        Ok(self.table.filter(|e| e.username == username))
    }
}
