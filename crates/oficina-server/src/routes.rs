//! Route handlers: login, logout, the current identity and the portals.

use axum::extract::{Extension, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{AppendHeaders, Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use oficina_auth::token::{decode_identity_token, verify_markers};
use oficina_core::models::identity::{Identity, Role};
use oficina_core::models::session::Session;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cookies::{TOKEN_COOKIE, clear_markers, parse_cookie, presented_markers, set_markers};
use crate::error::ApiError;
use crate::state::{AppContext, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page))
        .route("/api/auth/client", post(login_client))
        .route("/api/auth/employee", post(login_employee))
        .route("/api/auth/admin", post(login_admin))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(me))
        .route("/admin", get(portal))
        .route("/funcionario", get(portal))
        .route("/cliente", get(portal))
}

#[derive(Debug, Deserialize)]
pub struct ClientLogin {
    pub national_id: String,
}

#[derive(Debug, Deserialize)]
pub struct StaffLogin {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub role: Role,
    /// Portal the browser should go to next.
    pub redirect: &'static str,
    pub identity: Identity,
}

/// Landing section of each role.
pub fn home_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Employee => "/funcionario",
        Role::Client => "/cliente",
    }
}

/// Profile named by a verifiable token the browser already holds. A
/// fresh profile is minted at login otherwise.
fn presented_profile(state: &AppContext, headers: &HeaderMap) -> Option<String> {
    let token = parse_cookie(headers, TOKEN_COOKIE)?;
    decode_identity_token(&token, state.auth.config())
        .ok()
        .map(|claims| claims.sid)
}

fn login_profile(state: &AppContext, headers: &HeaderMap) -> String {
    presented_profile(state, headers).unwrap_or_else(|| Uuid::new_v4().to_string())
}

fn logged_in(state: &AppContext, outcome: Option<Session>) -> Result<Response, ApiError> {
    let session = outcome.ok_or(ApiError::InvalidCredentials)?;
    let max_age = state.auth.config().session_lifetime_secs as i64;
    let cookies = set_markers(&session.markers, max_age).map(|c| (SET_COOKIE, c));
    let role = session.identity.role;
    let body = LoginResponse {
        role,
        redirect: home_path(role),
        identity: session.identity,
    };
    Ok((AppendHeaders(cookies), Json(body)).into_response())
}

async fn login_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<ClientLogin>,
) -> Result<Response, ApiError> {
    let session = state.session(&login_profile(&state, &headers));
    let outcome = state
        .auth
        .authenticate_client(&session, &body.national_id)
        .await?;
    logged_in(&state, outcome)
}

async fn login_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<StaffLogin>,
) -> Result<Response, ApiError> {
    let session = state.session(&login_profile(&state, &headers));
    let outcome = state
        .auth
        .authenticate_employee(&session, &body.username, &body.password)
        .await?;
    logged_in(&state, outcome)
}

async fn login_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<StaffLogin>,
) -> Result<Response, ApiError> {
    let session = state.session(&login_profile(&state, &headers));
    let outcome = state
        .auth
        .authenticate_admin(&session, &body.username, &body.password)
        .await?;
    logged_in(&state, outcome)
}

/// POST /api/auth/logout — always clears the markers, even when the
/// browser had no live session.
async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, ApiError> {
    if let Some(profile) = presented_profile(&state, &headers) {
        state.auth.logout(&state.session(&profile)).await?;
    }
    let cookies = clear_markers().map(|c| (SET_COOKIE, c));
    Ok((StatusCode::NO_CONTENT, AppendHeaders(cookies)).into_response())
}

/// GET /api/auth/me — identity of the live session.
async fn me(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<Identity>, ApiError> {
    let (Some(token), Some(role)) = presented_markers(&headers) else {
        return Err(ApiError::NotAuthenticated);
    };
    let claims = verify_markers(&token, &role, state.auth.config())
        .map_err(|_| ApiError::NotAuthenticated)?;
    state
        .live_identity(&claims, &token)
        .map(Json)
        .ok_or(ApiError::NotAuthenticated)
}

/// Role sections. The guard has already matched the role and attached
/// the identity.
async fn portal(Extension(identity): Extension<Identity>) -> Json<Identity> {
    Json(identity)
}

const LOGIN_PAGE: &str = r#"<!doctype html>
<html lang="pt-BR">
<head><meta charset="utf-8"><title>Oficina - Entrar</title></head>
<body>
<h1>Oficina</h1>
<p>Clientes entram com o CPF em <code>POST /api/auth/client</code>.</p>
<p>Funcionários em <code>POST /api/auth/employee</code>.</p>
<p>Administradores em <code>POST /api/auth/admin</code>.</p>
</body>
</html>
"#;

async fn login_page() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}
