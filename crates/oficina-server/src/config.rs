//! Server configuration from `OFICINA_*` environment variables.

use std::path::PathBuf;

use oficina_auth::AuthConfig;

use crate::error::ServerError;

/// Where tables, sessions and the activity log are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageKind {
    /// Process memory; everything is lost on restart.
    Memory,
    /// Embedded redb file.
    Redb(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub storage: StorageKind,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup.
    ///
    /// | Variable                         | Default          |
    /// |----------------------------------|------------------|
    /// | `OFICINA_BIND`                   | `127.0.0.1:8080` |
    /// | `OFICINA_STORAGE`                | `memory`         |
    /// | `OFICINA_DB_PATH`                | `oficina.redb`   |
    /// | `OFICINA_JWT_PRIVATE_KEY_FILE`   | required         |
    /// | `OFICINA_JWT_PUBLIC_KEY_FILE`    | required         |
    /// | `OFICINA_JWT_ISSUER`             | `oficina`        |
    /// | `OFICINA_SESSION_LIFETIME_SECS`  | `28800`          |
    /// | `OFICINA_PEPPER`                 | none             |
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let defaults = AuthConfig::default();

        let bind_addr = get("OFICINA_BIND").unwrap_or_else(|| "127.0.0.1:8080".to_string());

        let storage = match get("OFICINA_STORAGE").as_deref() {
            None | Some("memory") => StorageKind::Memory,
            Some("redb") => StorageKind::Redb(
                get("OFICINA_DB_PATH")
                    .unwrap_or_else(|| "oficina.redb".to_string())
                    .into(),
            ),
            Some(other) => {
                return Err(ServerError::Config(format!(
                    "OFICINA_STORAGE must be `memory` or `redb`, got `{other}`"
                )));
            }
        };

        let session_lifetime_secs = match get("OFICINA_SESSION_LIFETIME_SECS") {
            Some(raw) => raw.parse().map_err(|_| {
                ServerError::Config(format!(
                    "OFICINA_SESSION_LIFETIME_SECS: `{raw}` is not a number"
                ))
            })?,
            None => defaults.session_lifetime_secs,
        };

        let auth = AuthConfig {
            jwt_private_key_pem: read_key(&get, "OFICINA_JWT_PRIVATE_KEY_FILE")?,
            jwt_public_key_pem: read_key(&get, "OFICINA_JWT_PUBLIC_KEY_FILE")?,
            jwt_issuer: get("OFICINA_JWT_ISSUER").unwrap_or(defaults.jwt_issuer),
            session_lifetime_secs,
            pepper: get("OFICINA_PEPPER").filter(|p| !p.is_empty()),
            activity_log_capacity: defaults.activity_log_capacity,
        };

        Ok(Self {
            bind_addr,
            storage,
            auth,
        })
    }
}

fn read_key(get: &impl Fn(&str) -> Option<String>, var: &str) -> Result<String, ServerError> {
    let path = get(var).ok_or_else(|| ServerError::Config(format!("{var} is not set")))?;
    std::fs::read_to_string(&path).map_err(|e| ServerError::Config(format!("{var} ({path}): {e}")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn key_file(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    fn lookup(vars: HashMap<&'static str, String>) -> impl Fn(&str) -> Option<String> {
        move |k| vars.get(k).cloned()
    }

    #[test]
    fn defaults_with_keys_only() {
        let private = key_file("PRIVATE");
        let public = key_file("PUBLIC");
        let vars = HashMap::from([
            (
                "OFICINA_JWT_PRIVATE_KEY_FILE",
                private.path().display().to_string(),
            ),
            (
                "OFICINA_JWT_PUBLIC_KEY_FILE",
                public.path().display().to_string(),
            ),
        ]);

        let config = ServerConfig::from_lookup(lookup(vars)).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.storage, StorageKind::Memory);
        assert_eq!(config.auth.jwt_private_key_pem, "PRIVATE");
        assert_eq!(config.auth.jwt_public_key_pem, "PUBLIC");
        assert_eq!(config.auth.jwt_issuer, "oficina");
        assert_eq!(config.auth.session_lifetime_secs, 28_800);
        assert!(config.auth.pepper.is_none());
    }

    #[test]
    fn redb_storage_and_overrides() {
        let private = key_file("PRIVATE");
        let public = key_file("PUBLIC");
        let vars = HashMap::from([
            (
                "OFICINA_JWT_PRIVATE_KEY_FILE",
                private.path().display().to_string(),
            ),
            (
                "OFICINA_JWT_PUBLIC_KEY_FILE",
                public.path().display().to_string(),
            ),
            ("OFICINA_STORAGE", "redb".to_string()),
            ("OFICINA_DB_PATH", "/var/lib/oficina/data.redb".to_string()),
            ("OFICINA_PEPPER", "pimenta".to_string()),
            ("OFICINA_SESSION_LIFETIME_SECS", "3600".to_string()),
        ]);

        let config = ServerConfig::from_lookup(lookup(vars)).unwrap();
        assert_eq!(
            config.storage,
            StorageKind::Redb("/var/lib/oficina/data.redb".into())
        );
        assert_eq!(config.auth.pepper.as_deref(), Some("pimenta"));
        assert_eq!(config.auth.session_lifetime_secs, 3600);
    }

    #[test]
    fn missing_key_file_is_a_config_error() {
        let err = ServerConfig::from_lookup(lookup(HashMap::new())).unwrap_err();
        assert!(matches!(err, ServerError::Config(msg) if msg.contains("PRIVATE_KEY_FILE")));
    }

    #[test]
    fn unknown_storage_kind_is_rejected() {
        let vars = HashMap::from([("OFICINA_STORAGE", "postgres".to_string())]);
        assert!(matches!(
            ServerConfig::from_lookup(lookup(vars)),
            Err(ServerError::Config(_))
        ));
    }
}
