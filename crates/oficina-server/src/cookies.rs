//! Session marker cookies.

use axum::http::HeaderMap;
use oficina_core::models::session::SessionMarkers;

/// Cookie carrying the signed identity token.
pub const TOKEN_COOKIE: &str = "oficina_token";
/// Cookie carrying the role marker.
pub const ROLE_COOKIE: &str = "oficina_role";

/// Value of the named cookie from the request's `Cookie` header.
pub fn parse_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(axum::http::header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}

/// Both markers as presented by the browser, if any.
pub fn presented_markers(headers: &HeaderMap) -> (Option<String>, Option<String>) {
    (
        parse_cookie(headers, TOKEN_COOKIE),
        parse_cookie(headers, ROLE_COOKIE),
    )
}

fn cookie(name: &str, value: &str, max_age: i64) -> String {
    format!("{name}={value}; Path=/; Max-Age={max_age}; SameSite=Strict; HttpOnly")
}

/// `Set-Cookie` values that hand both markers to the browser.
pub fn set_markers(markers: &SessionMarkers, max_age_secs: i64) -> [String; 2] {
    [
        cookie(TOKEN_COOKIE, &markers.identity_token, max_age_secs),
        cookie(ROLE_COOKIE, markers.role.as_str(), max_age_secs),
    ]
}

/// `Set-Cookie` values that make the browser drop both markers.
pub fn clear_markers() -> [String; 2] {
    [cookie(TOKEN_COOKIE, "", 0), cookie(ROLE_COOKIE, "", 0)]
}
