//! Password hashing for admin accounts using Argon2id.
//!
//! Hashes are stored as PHC strings, so the parameters travel with the hash
//! and verification keeps working across parameter upgrades.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    HashError(String),

    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Argon2id parameters following the OWASP password storage guidance:
/// 19 MiB memory, 2 iterations, single lane.
const MEMORY_COST: u32 = 19456;
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;
const OUTPUT_LEN: usize = 32;

fn hasher() -> Result<Argon2<'static>, PasswordError> {
    let params = Params::new(MEMORY_COST, TIME_COST, PARALLELISM, Some(OUTPUT_LEN))
        .map_err(|e| PasswordError::HashError(format!("Invalid Argon2 params: {}", e)))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hashes a password with a fresh random salt.
///
/// Returns a PHC-formatted string (`$argon2id$...`) suitable for storing in
/// the `password_hash` column of the admin accounts table.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Verifies a password against a stored PHC hash.
///
/// A mismatch is `Ok(false)`, not an error; only a malformed stored hash or
/// an internal Argon2 failure produces `Err`.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHashFormat)?;

    // The stored hash carries its own parameters, so the default instance
    // verifies hashes produced under any parameter set.
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_phc_formatted() {
        let hash = hash_password("hunter2hunter2").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.contains("m=19456"));
        assert!(hash.contains("t=2"));
        assert!(hash.contains("p=1"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let a = hash_password("same-password").unwrap();
        let b = hash_password("same-password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_roundtrip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash).unwrap());
        assert!(!verify_password("incorrect horse", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let result = verify_password("whatever", "not-a-phc-string");
        assert!(matches!(result, Err(PasswordError::InvalidHashFormat)));
    }

    #[test]
    fn test_verify_unicode_password() {
        let hash = hash_password("pässwörd-密码").unwrap();
        assert!(verify_password("pässwörd-密码", &hash).unwrap());
        assert!(!verify_password("password", &hash).unwrap());
    }

    #[test]
    fn test_verify_legacy_parameter_hash() {
        // A hash produced with different cost parameters still verifies,
        // since verification reads parameters from the PHC string.
        let salt = SaltString::generate(&mut OsRng);
        let weak_params = Params::new(8192, 1, 1, Some(32)).unwrap();
        let legacy = Argon2::new(Algorithm::Argon2id, Version::V0x13, weak_params)
            .hash_password(b"old-password", &salt)
            .unwrap()
            .to_string();

        assert!(verify_password("old-password", &legacy).unwrap());
    }
}
