//! Authentication service — login and logout for the three portals.
//!
//! Every lookup miss, wrong password and disabled account comes back
//! as `Ok(None)`. Callers show one generic message for all of them so
//! the response never reveals which accounts exist.

use oficina_core::error::OficinaResult;
use oficina_core::models::activity::CreateActivityLogEntry;
use oficina_core::models::identity::Identity;
use oficina_core::models::session::{Session, SessionMarkers};
use oficina_core::repository::{
    ActivityLogRepository, AdminRepository, ClientRepository, EmployeeRepository,
};
use oficina_db::StorageBackend;
use tracing::{debug, info, warn};

use crate::config::AuthConfig;
use crate::password;
use crate::session::SessionStore;
use crate::token;

/// Activity log module for authentication events.
pub const AUTH_MODULE: &str = "auth";

/// Authenticator for clients, employees and administrators.
///
/// Generic over repository implementations so that the auth layer
/// does not care where identities are stored.
pub struct Authenticator<C, E, A, L>
where
    C: ClientRepository,
    E: EmployeeRepository,
    A: AdminRepository,
    L: ActivityLogRepository,
{
    clients: C,
    employees: E,
    admins: A,
    activity: L,
    config: AuthConfig,
}

impl<C, E, A, L> Authenticator<C, E, A, L>
where
    C: ClientRepository,
    E: EmployeeRepository,
    A: AdminRepository,
    L: ActivityLogRepository,
{
    pub fn new(clients: C, employees: E, admins: A, activity: L, config: AuthConfig) -> Self {
        Self {
            clients,
            employees,
            admins,
            activity,
            config,
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn activity(&self) -> &L {
        &self.activity
    }

    /// Log a client in by CPF. The CPF must match the stored value
    /// exactly, formatting included.
    pub async fn authenticate_client<B: StorageBackend>(
        &self,
        session: &SessionStore<B>,
        national_id: &str,
    ) -> OficinaResult<Option<Session>> {
        let Some(client) = self.clients.find_by_national_id(national_id).await? else {
            debug!("client login: no matching national id");
            return Ok(None);
        };

        self.establish(session, client.to_identity()).await.map(Some)
    }

    /// Log an employee in. Every row with the username is tried in
    /// stored order; the first whose password verifies and whose
    /// account is active wins. Disabled accounts never authenticate,
    /// even with the right password.
    pub async fn authenticate_employee<B: StorageBackend>(
        &self,
        session: &SessionStore<B>,
        username: &str,
        password: &str,
    ) -> OficinaResult<Option<Session>> {
        let candidates = self.employees.find_by_username(username).await?;
        if candidates.is_empty() {
            password::verify_against_dummy(password, self.config.pepper.as_deref());
            debug!("employee login: unknown username");
            return Ok(None);
        }

        for employee in candidates {
            if !self.password_matches(password, &employee.password_hash, &employee.id) {
                debug!(user_id = %employee.id, "employee login: wrong password");
                continue;
            }
            if !employee.active {
                info!(user_id = %employee.id, "employee login refused: account inactive");
                continue;
            }
            return self.establish(session, employee.to_identity()).await.map(Some);
        }
        Ok(None)
    }

    /// Log an administrator in. Rows sharing a username are tried in
    /// stored order.
    pub async fn authenticate_admin<B: StorageBackend>(
        &self,
        session: &SessionStore<B>,
        username: &str,
        password: &str,
    ) -> OficinaResult<Option<Session>> {
        let candidates = self.admins.find_by_username(username).await?;
        if candidates.is_empty() {
            password::verify_against_dummy(password, self.config.pepper.as_deref());
            debug!("admin login: unknown username");
            return Ok(None);
        }

        for admin in candidates {
            if self.password_matches(password, &admin.password_hash, &admin.id) {
                return self.establish(session, admin.to_identity()).await.map(Some);
            }
            debug!(user_id = %admin.id, "admin login: wrong password");
        }
        Ok(None)
    }

    /// End the profile's session. Logging out while anonymous is a
    /// no-op apart from clearing any leftovers.
    pub async fn logout<B: StorageBackend>(&self, session: &SessionStore<B>) -> OficinaResult<()> {
        if let Some(identity) = session.current() {
            self.record(&identity, "logout", format!("{} saiu do sistema", identity.name))
                .await;
            info!(user_id = %identity.id, role = %identity.role, "logout");
        }
        session.invalidate();
        Ok(())
    }

    /// A stored hash that cannot be parsed counts as a mismatch.
    fn password_matches(&self, password: &str, hash: &str, user_id: &str) -> bool {
        match password::verify_password(password, hash, self.config.pepper.as_deref()) {
            Ok(valid) => valid,
            Err(e) => {
                warn!(user_id, error = %e, "stored password hash is unusable");
                false
            }
        }
    }

    async fn establish<B: StorageBackend>(
        &self,
        session: &SessionStore<B>,
        identity: Identity,
    ) -> OficinaResult<Session> {
        let created_at = session.now();
        let identity_token =
            token::issue_identity_token(&identity, session.profile(), created_at, &self.config)?;
        let markers = SessionMarkers {
            identity_token,
            role: identity.role,
        };

        let established = session.establish(identity, markers, created_at)?;
        let identity = &established.identity;
        self.record(identity, "login", format!("{} entrou no sistema", identity.name))
            .await;
        info!(
            user_id = %identity.id,
            role = %identity.role,
            profile = %established.profile,
            "login"
        );

        Ok(established)
    }

    /// Activity logging never blocks authentication.
    async fn record(&self, identity: &Identity, action: &str, details: String) {
        let entry = CreateActivityLogEntry {
            actor_id: identity.id.clone(),
            actor_name: identity.name.clone(),
            action: action.to_string(),
            details,
            module: AUTH_MODULE.to_string(),
        };
        if let Err(e) = self.activity.append(entry).await {
            warn!(user_id = %identity.id, action, error = %e, "failed to record activity");
        }
    }
}
