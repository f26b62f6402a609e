//! # Quill Auth
//!
//! The authentication and authorization core of the Quill API:
//!
//! - [`password`]: bcrypt credential hashing and verification
//! - [`jwt`]: [`TokenService`], which issues and verifies HS256 bearer tokens
//! - [`claims`]: [`IdentityClaims`] embedded in every token
//! - [`ownership`]: the ownership predicate used before mutating a resource
//!
//! Failures are reported as [`AuthError`], which converts into
//! [`quill_core::AppError`] with a fixed HTTP status per variant.

pub mod claims;
pub mod error;
pub mod jwt;
pub mod ownership;
pub mod password;

// Re-export commonly used types at crate root
pub use claims::IdentityClaims;
pub use error::AuthError;
pub use jwt::TokenService;
pub use ownership::{Owned, is_owner, owner_matches};
pub use password::{MAX_PASSWORD_BYTES, hash_password, verify_password};
