//! Route guard middleware for the portal sections.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use oficina_auth::{GuardDecision, RedirectReason};
use tracing::debug;

use crate::cookies::presented_markers;
use crate::state::AppState;

/// Route guard middleware.
///
/// Verifies the session markers for role-scoped sections and checks
/// that the server still holds the session they point at. On success
/// the [`Identity`](oficina_core::models::identity::Identity) is
/// stored as an extension for the portal handlers.
pub async fn portal_guard(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let (token, role) = presented_markers(req.headers());

    let config = state.auth.config();
    let outcome = state
        .guard
        .check_markers(&path, token.as_deref(), role.as_deref(), config);

    match outcome.decision {
        GuardDecision::Allow => {
            if let (Some(claims), Some(token)) = (outcome.claims, token.as_deref()) {
                let Some(identity) = state.live_identity(&claims, token) else {
                    debug!(path = %path, profile = %claims.sid, "markers outlived their session");
                    return to_login(state.guard.login_path(), RedirectReason::Unauthenticated);
                };
                req.extensions_mut().insert(identity);
            }
            next.run(req).await
        }
        GuardDecision::Redirect { location, reason } => to_login(&location, reason),
    }
}

fn to_login(location: &str, reason: RedirectReason) -> Response {
    debug!(?reason, location, "guard redirect");
    Redirect::to(location).into_response()
}
