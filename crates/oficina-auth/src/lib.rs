//! Oficina Auth — credential checks for the three portals, the
//! session store, signed session markers and the route guard.

pub mod config;
pub mod error;
pub mod guard;
pub mod password;
pub mod service;
pub mod session;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use guard::{GuardDecision, GuardOutcome, RedirectReason, RouteGuard};
pub use service::Authenticator;
pub use session::SessionStore;
pub use token::IdentityClaims;
