//! Password verification using Argon2id.

use std::sync::OnceLock;

use argon2::{Argon2, PasswordVerifier};

use crate::error::AuthError;

/// Verify a plaintext password against an Argon2id PHC-format hash.
///
/// If `pepper` is provided it is prepended to the password before
/// verification; it must match the pepper used during hashing. The
/// digest comparison inside `argon2` is constant-time.
///
/// Returns `Ok(true)` on match, `Ok(false)` on mismatch, or
/// `Err(AuthError::Crypto)` if the stored hash is malformed.
pub fn verify_password(
    password: &str,
    hash: &str,
    pepper: Option<&str>,
) -> Result<bool, AuthError> {
    let input = match pepper {
        Some(p) => format!("{p}{password}"),
        None => password.to_string(),
    };

    let parsed_hash = argon2::PasswordHash::new(hash)
        .map_err(|e| AuthError::Crypto(format!("invalid hash format: {e}")))?;

    match Argon2::default().verify_password(input.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Crypto(format!("verify error: {e}"))),
    }
}

/// Spend one verification's worth of work when the account does not
/// exist, so a miss takes as long as a wrong password.
pub fn verify_against_dummy(password: &str, pepper: Option<&str>) {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

    let dummy = DUMMY_HASH.get_or_init(|| oficina_db::hash_password("oficina-dummy", None).ok());
    if let Some(hash) = dummy {
        let _ = verify_password(password, hash, pepper);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oficina_db::hash_password;

    #[test]
    fn correct_password_matches() {
        let hash = hash_password("func123", None).unwrap();
        assert!(verify_password("func123", &hash, None).unwrap());
    }

    #[test]
    fn wrong_password_does_not_match() {
        let hash = hash_password("func123", None).unwrap();
        assert!(!verify_password("func124", &hash, None).unwrap());
        assert!(!verify_password("", &hash, None).unwrap());
    }

    #[test]
    fn pepper_is_applied() {
        let hash = hash_password("admin123", Some("pimenta")).unwrap();
        assert!(verify_password("admin123", &hash, Some("pimenta")).unwrap());
        assert!(!verify_password("admin123", &hash, None).unwrap());
    }

    #[test]
    fn plaintext_stored_value_is_an_error() {
        // A row still holding a plaintext password is malformed data.
        assert!(verify_password("admin123", "admin123", None).is_err());
    }

    #[test]
    fn dummy_verification_does_not_panic() {
        verify_against_dummy("anything", Some("pimenta"));
    }
}
