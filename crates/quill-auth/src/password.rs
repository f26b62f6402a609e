//! Credential hashing with bcrypt.
//!
//! Hashes are self-describing (`$2b$<cost>$<salt><digest>`) and safe to store
//! as-is. bcrypt only looks at the first 72 bytes, so longer plaintexts are
//! refused instead of being silently truncated.

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::error::AuthError;

/// Largest plaintext, in bytes, bcrypt can hash without truncation.
pub const MAX_PASSWORD_BYTES: usize = 72;

pub fn hash_password(password: &str) -> Result<String, AuthError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(AuthError::Hashing(format!(
            "password exceeds {} bytes",
            MAX_PASSWORD_BYTES
        )));
    }

    hash(password, DEFAULT_COST).map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Returns `true` only when `password` matches `hashed`.
///
/// A malformed hash, or a plaintext too long to have been hashed, is reported
/// as a mismatch, never as an error.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    if password.len() > MAX_PASSWORD_BYTES {
        return false;
    }

    verify(password, hashed).unwrap_or(false)
}
