//! Opaque session token generation and digesting.
//!
//! A session token is 32 bytes of OS randomness, URL-safe base64 encoded for
//! the cookie. Only the SHA-256 hex digest is persisted, so a leaked sessions
//! table cannot be replayed against the API.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Number of random bytes in a freshly issued session token.
const TOKEN_BYTES: usize = 32;

/// Generates a new opaque session token.
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Computes the SHA-256 digest of a token as a lowercase hex string.
///
/// This is what gets stored in (and looked up from) the sessions table.
pub fn token_digest(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique() {
        let a = generate_session_token();
        let b = generate_session_token();
        assert_ne!(a, b);
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = generate_session_token();
        assert!(!token.contains('+'));
        assert!(!token.contains('/'));
        assert!(!token.contains('='));
        // 32 bytes -> 43 base64 chars without padding
        assert_eq!(token.len(), 43);
    }

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(token_digest("abc"), token_digest("abc"));
        assert_ne!(token_digest("abc"), token_digest("abd"));
    }

    #[test]
    fn test_digest_known_value() {
        assert_eq!(
            token_digest("test"),
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
    }

    #[test]
    fn test_digest_length() {
        assert_eq!(token_digest(&generate_session_token()).len(), 64);
    }
}
