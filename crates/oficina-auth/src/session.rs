//! The session store: who is logged in within one browser profile.
//!
//! Two states only. Anonymous becomes Authenticated through
//! [`SessionStore::establish`]; Authenticated becomes Anonymous through
//! [`SessionStore::invalidate`] or when expiry is noticed on the next
//! access. There is no renewal.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use oficina_core::clock::Clock;
use oficina_core::error::OficinaResult;
use oficina_core::models::identity::Identity;
use oficina_core::models::session::{Session, SessionMarkers};
use oficina_db::{DataStore, StorageBackend};
use tracing::{debug, info, warn};

/// Profile used when a store is not tied to a specific browser.
pub const DEFAULT_PROFILE: &str = "default";

/// Storage key of a profile's session.
pub fn session_key(profile: &str) -> String {
    format!("session:{profile}")
}

pub struct SessionStore<B: StorageBackend> {
    store: Arc<DataStore<B>>,
    clock: Arc<dyn Clock>,
    lifetime: Duration,
    profile: String,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(store: Arc<DataStore<B>>, clock: Arc<dyn Clock>, lifetime: Duration) -> Self {
        Self::for_profile(store, clock, lifetime, DEFAULT_PROFILE)
    }

    pub fn for_profile(
        store: Arc<DataStore<B>>,
        clock: Arc<dyn Clock>,
        lifetime: Duration,
        profile: impl Into<String>,
    ) -> Self {
        Self {
            store,
            clock,
            lifetime,
            profile: profile.into(),
        }
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Replace whatever session this profile had with a new one.
    pub fn establish(
        &self,
        identity: Identity,
        markers: SessionMarkers,
        created_at: DateTime<Utc>,
    ) -> OficinaResult<Session> {
        let session = Session {
            profile: self.profile.clone(),
            identity,
            markers,
            created_at,
        };
        self.store.save_json(&session_key(&self.profile), &session)?;
        debug!(profile = %self.profile, user_id = %session.identity.id, "session established");
        Ok(session)
    }

    /// The live session, if any. An expired session is invalidated
    /// here and reported as absent.
    pub fn session(&self) -> Option<Session> {
        let session = self.load()?;
        if session.is_expired_at(self.clock.now(), self.lifetime) {
            info!(
                profile = %self.profile,
                user_id = %session.identity.id,
                "session expired, logging out"
            );
            self.invalidate();
            return None;
        }
        Some(session)
    }

    /// The logged-in identity, or `None` when absent or expired.
    pub fn current(&self) -> Option<Identity> {
        self.session().map(|s| s.identity)
    }

    pub fn markers(&self) -> Option<SessionMarkers> {
        self.session().map(|s| s.markers)
    }

    /// Whether the stored session has reached its lifetime. An absent
    /// session is not expired. Does not invalidate.
    pub fn is_expired(&self) -> bool {
        self.load()
            .is_some_and(|s| s.is_expired_at(self.clock.now(), self.lifetime))
    }

    /// Forget the identity and both markers. Safe to call repeatedly.
    pub fn invalidate(&self) {
        if let Err(e) = self.store.remove(&session_key(&self.profile)) {
            warn!(profile = %self.profile, error = %e, "failed to clear session");
        }
    }

    fn load(&self) -> Option<Session> {
        match self.store.load_json::<Session>(&session_key(&self.profile)) {
            Ok(session) => session,
            Err(e) => {
                warn!(profile = %self.profile, error = %e, "session storage unavailable");
                None
            }
        }
    }
}
