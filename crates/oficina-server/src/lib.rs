//! Oficina Server — HTTP surface of the console.
//!
//! Login and logout for the three portals under `/api/auth`, and the
//! role-scoped portal sections behind the route guard. Session markers
//! travel as cookies; the session itself lives in the data store keyed
//! by the browser profile named in the identity token.

pub mod config;
pub mod cookies;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;

pub use config::{ServerConfig, StorageKind};
pub use error::{ApiError, ServerError};
pub use state::{AppContext, AppState};

/// Build the complete router with the guard applied to every path.
pub fn build_router(state: AppState) -> Router {
    routes::routes()
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::portal_guard,
        ))
        .with_state(state)
}
