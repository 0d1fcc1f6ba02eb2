//! Password hashing.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{Error, SaltString, rand_core::OsRng},
};
use once_cell::sync::Lazy;

/// Verified against when no account matches, so unknown emails cost the same
/// as wrong passwords.
static UNKNOWN_ACCOUNT_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash_password("unknown-account").ok());

/// Hash `password` into a PHC string with a fresh random salt.
///
/// # Errors
///
/// Returns an error when hashing fails.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

/// Check `password` against a stored PHC string. Unparseable hashes never match.
#[must_use]
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Like [`verify_password`], but a missing hash still pays for one verification.
#[must_use]
pub fn verify_stored_password(password: &str, stored: Option<&str>) -> bool {
    match stored {
        Some(hash) => verify_password(password, hash),
        None => {
            if let Some(hash) = UNKNOWN_ACCOUNT_HASH.as_deref() {
                let _ = verify_password(password, hash);
            }

            false
        }
    }
}
