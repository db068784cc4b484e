//! Salted password hashing.
//!
//! Passwords are stored as `salt$digest`, both hex-encoded: a random 16-byte
//! salt and the SHA-256 digest of salt followed by the password bytes.

use rand::RngCore;
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;

/// Hashes a password with a fresh random salt.
///
/// Two calls with the same password produce different strings.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);

    let digest = salted_digest(&salt, password);

    format!("{}${}", hex::encode(salt), hex::encode(digest))
}

/// Checks a password against a stored `salt$digest` string.
///
/// Returns false for any malformed stored value rather than erroring; a
/// corrupt hash behaves like a wrong password.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest_hex)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    let Ok(expected) = hex::decode(digest_hex) else {
        return false;
    };

    salted_digest(&salt, password).as_slice() == expected.as_slice()
}

fn salted_digest(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_original_password() {
        let stored = hash_password("secreto123");

        assert!(verify_password("secreto123", &stored));
    }

    #[test]
    fn rejects_wrong_password() {
        let stored = hash_password("secreto123");

        assert!(!verify_password("secreto124", &stored));
        assert!(!verify_password("", &stored));
    }

    #[test]
    fn same_password_hashes_differently() {
        let first = hash_password("secreto123");
        let second = hash_password("secreto123");

        assert_ne!(first, second);
    }

    #[test]
    fn rejects_malformed_stored_value() {
        assert!(!verify_password("secreto123", "not-a-hash"));
        assert!(!verify_password("secreto123", "zz$zz"));
        assert!(!verify_password("secreto123", ""));
    }
}
