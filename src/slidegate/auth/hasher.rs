//! Argon2id password hashing.

use anyhow::{anyhow, Result};
use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::rngs::OsRng;

/// Hashes a batch of plaintext passwords, preserving their order.
pub struct Hasher {
    passwords: Vec<String>,
}

impl Hasher {
    #[must_use]
    pub fn new(passwords: Vec<String>) -> Self {
        Self { passwords }
    }

    /// Produce one PHC hash string per input password.
    ///
    /// # Errors
    /// Returns an error if Argon2 fails to hash any of the passwords.
    pub fn generate(&self) -> Result<Vec<String>> {
        self.passwords
            .iter()
            .map(|password| hash_password(password))
            .collect()
    }
}

/// Hash a password with Argon2id and a random salt.
///
/// # Errors
/// Returns an error if Argon2 rejects the input.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| anyhow!("failed to hash password"))?
        .to_string();
    Ok(hash)
}

/// Check a password against a stored PHC hash; malformed hashes never match.
#[must_use]
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
