//! Password hashing and verification (Argon2id, PHC strings).

use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use rand::Rng;

const SALT_LEN: usize = 16;

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// Hash `plain` with a fresh random salt. Returns a PHC-formatted string.
///
/// # Errors
///
/// Returns an error if the salt cannot be encoded or Argon2 rejects the input.
pub fn hash_password(plain: &str) -> Result<String, PasswordError> {
    let salt_bytes: [u8; SALT_LEN] = rand::rng().random();
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| PasswordError::Hash(e.to_string()))?;
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Check `plain` against a stored PHC hash. A malformed hash never verifies.
#[must_use]
pub fn verify_password(hash: &str, plain: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
