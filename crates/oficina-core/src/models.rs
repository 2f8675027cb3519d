//! Domain models for the Oficina console.
//!
//! Identity, session and activity types drive authentication. The
//! remaining modules are the typed records behind each persisted
//! table.

pub mod activity;
pub mod admin;
pub mod appointment;
pub mod client;
pub mod employee;
pub mod identity;
pub mod quote;
pub mod service_order;
pub mod session;
pub mod stock;
pub mod vehicle;
