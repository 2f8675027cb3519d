//! Route guard for the role-scoped portal sections.
//!
//! A path under a section requires that section's role. Public paths
//! and paths outside every section are let through without looking at
//! the markers. Both a missing session and a session of the wrong role
//! redirect to the login page; the [`RedirectReason`] keeps the two
//! cases apart for logging and for callers that want to answer them
//! differently.

use oficina_core::models::identity::Role;
use tracing::{debug, warn};

use crate::config::AuthConfig;
use crate::token::{self, IdentityClaims};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// No valid session markers were presented.
    Unauthenticated,
    /// Valid markers, but for another portal.
    WrongRole { required: Role, presented: Role },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect {
        location: String,
        reason: RedirectReason,
    },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// Decision plus the verified token claims, when markers were checked
/// and were valid.
#[derive(Debug, Clone)]
pub struct GuardOutcome {
    pub decision: GuardDecision,
    pub claims: Option<IdentityClaims>,
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    sections: Vec<(String, Role)>,
    public: Vec<String>,
    login_path: String,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self {
            sections: vec![
                ("/admin".into(), Role::Admin),
                ("/funcionario".into(), Role::Employee),
                ("/cliente".into(), Role::Client),
            ],
            public: vec![
                "/".into(),
                "/login".into(),
                "/api/auth".into(),
                "/static".into(),
                "/favicon.ico".into(),
            ],
            login_path: "/login".into(),
        }
    }
}

/// `path` equals `prefix` or continues it with a new segment.
fn under(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || prefix.ends_with('/'),
        None => false,
    }
}

impl RouteGuard {
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public.iter().any(|p| {
            if p == "/" {
                path == "/"
            } else {
                under(path, p)
            }
        })
    }

    /// Role a path requires, or `None` when anyone may see it.
    pub fn required_role(&self, path: &str) -> Option<Role> {
        if self.is_public(path) {
            return None;
        }
        self.sections
            .iter()
            .find(|(prefix, _)| under(path, prefix))
            .map(|(_, role)| *role)
    }

    /// Decide on a path given an already verified role.
    pub fn check(&self, path: &str, role: Option<Role>) -> GuardDecision {
        let Some(required) = self.required_role(path) else {
            return GuardDecision::Allow;
        };
        let reason = match role {
            Some(presented) if presented == required => return GuardDecision::Allow,
            Some(presented) => {
                warn!(path, %required, %presented, "role mismatch, redirecting to login");
                RedirectReason::WrongRole {
                    required,
                    presented,
                }
            }
            None => {
                debug!(path, %required, "no session, redirecting to login");
                RedirectReason::Unauthenticated
            }
        };
        GuardDecision::Redirect {
            location: self.login_path.clone(),
            reason,
        }
    }

    /// Decide on a path from the raw cookie values. Markers that do not
    /// verify count as no session at all.
    pub fn check_markers(
        &self,
        path: &str,
        identity_token: Option<&str>,
        role_marker: Option<&str>,
        config: &AuthConfig,
    ) -> GuardOutcome {
        if self.required_role(path).is_none() {
            return GuardOutcome {
                decision: GuardDecision::Allow,
                claims: None,
            };
        }

        let claims = match (identity_token, role_marker) {
            (Some(t), Some(r)) => match token::verify_markers(t, r, config) {
                Ok(claims) => Some(claims),
                Err(e) => {
                    debug!(path, error = %e, "session markers rejected");
                    None
                }
            },
            _ => None,
        };

        GuardOutcome {
            decision: self.check(path, claims.as_ref().map(|c| c.role)),
            claims,
        }
    }
}
