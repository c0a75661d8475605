//! Argon2id password hashes
//!
//! Accounts only ever store the PHC-encoded output of [`hash_password`]. The
//! encoding carries its own salt and cost parameters, so verification needs
//! nothing but the stored string.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::types::{AccountError, Result};

/// Hash `plaintext` with a fresh random salt
pub fn hash_password(plaintext: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let encoded = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| AccountError::Auth(format!("Could not hash password: {e}")))?;
    Ok(encoded.to_string())
}

/// Check `plaintext` against a stored PHC string.
///
/// A mismatch is `Ok(false)`; only a malformed `stored` value is an error.
pub fn verify_password(plaintext: &str, stored: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| AccountError::Auth(format!("Stored password hash is malformed: {e}")))?;
    let matches = Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok();
    Ok(matches)
}
