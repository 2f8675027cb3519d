//! Shared application state.

use std::sync::Arc;

use oficina_auth::session::SessionStore;
use oficina_auth::{Authenticator, AuthConfig, IdentityClaims, RouteGuard};
use oficina_core::clock::Clock;
use oficina_core::models::identity::Identity;
use oficina_db::repository::{
    SheetAdminRepository, SheetClientRepository, SheetEmployeeRepository, StoreActivityLog,
};
use oficina_db::{DataStore, SharedBackend, StoreConfig};

pub type ServerAuthenticator = Authenticator<
    SheetClientRepository<SharedBackend>,
    SheetEmployeeRepository<SharedBackend>,
    SheetAdminRepository<SharedBackend>,
    StoreActivityLog<SharedBackend>,
>;

pub struct AppContext {
    pub store: Arc<DataStore<SharedBackend>>,
    pub auth: ServerAuthenticator,
    pub guard: RouteGuard,
    clock: Arc<dyn Clock>,
}

pub type AppState = Arc<AppContext>;

impl AppContext {
    pub fn new(backend: SharedBackend, config: AuthConfig, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(DataStore::new(
            backend,
            StoreConfig {
                pepper: config.pepper.clone(),
            },
        ));
        let activity = StoreActivityLog::new(
            store.clone(),
            clock.clone(),
            config.activity_log_capacity,
        );
        let auth = Authenticator::new(
            SheetClientRepository::new(store.clone()),
            SheetEmployeeRepository::new(store.clone()),
            SheetAdminRepository::new(store.clone()),
            activity,
            config,
        );
        Self {
            store,
            auth,
            guard: RouteGuard::default(),
            clock,
        }
    }

    pub fn into_state(self) -> AppState {
        Arc::new(self)
    }

    /// Session store of one browser profile.
    pub fn session(&self, profile: &str) -> SessionStore<SharedBackend> {
        SessionStore::for_profile(
            self.store.clone(),
            self.clock.clone(),
            self.auth.config().session_lifetime(),
            profile,
        )
    }

    /// The identity behind a verified token, if the server still holds
    /// the session that token was issued for. Logged-out, expired and
    /// replaced sessions yield `None` even while the token itself is
    /// unexpired; a new login in the same profile retires older tokens.
    pub fn live_identity(&self, claims: &IdentityClaims, token: &str) -> Option<Identity> {
        self.session(&claims.sid)
            .session()
            .filter(|s| s.markers.identity_token == token)
            .map(|s| s.identity)
            .filter(|identity| identity.id == claims.sub && identity.role == claims.role)
    }
}
