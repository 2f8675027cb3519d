//! Repository trait definitions for data access abstraction.
//!
//! Lookups that miss return `Ok(None)`: a credential that matches
//! nothing is an ordinary outcome, not an error.

use crate::error::OficinaResult;
use crate::models::{
    activity::{ActivityLogEntry, CreateActivityLogEntry},
    admin::Admin,
    client::Client,
    employee::Employee,
};

/// Pagination parameters for list queries.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 50,
        }
    }
}

/// A paginated result set.
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

// ---------------------------------------------------------------------------
// Identity tables
// ---------------------------------------------------------------------------

pub trait ClientRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = OficinaResult<Vec<Client>>> + Send;
    /// First client whose CPF equals `national_id` exactly.
    fn find_by_national_id(
        &self,
        national_id: &str,
    ) -> impl Future<Output = OficinaResult<Option<Client>>> + Send;
}

pub trait EmployeeRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = OficinaResult<Vec<Employee>>> + Send;
    /// Every employee whose username equals `username` exactly, active
    /// or not, in stored order.
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = OficinaResult<Vec<Employee>>> + Send;
}

pub trait AdminRepository: Send + Sync {
    /// Every admin row with this exact username, in stored order.
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = OficinaResult<Vec<Admin>>> + Send;
}

// ---------------------------------------------------------------------------
// Activity log (append-only)
// ---------------------------------------------------------------------------

/// Query filters for activity log entries.
#[derive(Debug, Clone, Default)]
pub struct ActivityLogFilter {
    pub actor_id: Option<String>,
    pub action: Option<String>,
    pub module: Option<String>,
    pub from: Option<chrono::DateTime<chrono::Utc>>,
    pub to: Option<chrono::DateTime<chrono::Utc>>,
}

impl ActivityLogFilter {
    pub fn matches(&self, entry: &ActivityLogEntry) -> bool {
        self.actor_id.as_ref().is_none_or(|a| &entry.actor_id == a)
            && self.action.as_ref().is_none_or(|a| &entry.action == a)
            && self.module.as_ref().is_none_or(|m| &entry.module == m)
            && self.from.is_none_or(|from| entry.timestamp >= from)
            && self.to.is_none_or(|to| entry.timestamp <= to)
    }
}

pub trait ActivityLogRepository: Send + Sync {
    /// Record a new entry at the head of the log, evicting the oldest
    /// entries beyond capacity. No update or delete of single entries
    /// exists.
    fn append(
        &self,
        input: CreateActivityLogEntry,
    ) -> impl Future<Output = OficinaResult<ActivityLogEntry>> + Send;
    /// Entries newest first.
    fn list(
        &self,
        filter: ActivityLogFilter,
        pagination: Pagination,
    ) -> impl Future<Output = OficinaResult<PaginatedResult<ActivityLogEntry>>> + Send;
    /// Drop every entry.
    fn clear(&self) -> impl Future<Output = OficinaResult<()>> + Send;
}
