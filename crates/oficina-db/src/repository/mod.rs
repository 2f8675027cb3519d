//! Repository implementations over the [`DataStore`](crate::DataStore).

mod activity;
mod admin;
mod client;
mod employee;
mod table;

pub use activity::{ACTIVITY_LOG_KEY, StoreActivityLog};
pub use admin::SheetAdminRepository;
pub use client::SheetClientRepository;
pub use employee::SheetEmployeeRepository;
pub use table::SheetTable;
