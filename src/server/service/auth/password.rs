//! Argon2id password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::internal::InternalError;

/// Hashes `password` with Argon2id and a random salt.
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash, e.g. `$argon2id$v=19$...`
/// - `Err(InternalError::PasswordHash)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(InternalError::PasswordHash)?;

    Ok(hash.to_string())
}

/// Checks `password` against a stored PHC hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(InternalError::PasswordHash)` - Stored hash could not be parsed
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, InternalError> {
    let parsed = PasswordHash::new(stored_hash).map_err(InternalError::PasswordHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(InternalError::PasswordHash(e)),
    }
}
