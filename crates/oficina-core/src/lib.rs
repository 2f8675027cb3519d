//! Oficina Core — domain models, repository traits, clock and error
//! types shared by every Oficina crate.

pub mod clock;
pub mod error;
pub mod models;
pub mod repository;
