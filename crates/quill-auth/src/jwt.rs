//! Issuing and verifying HS256 bearer tokens.
//!
//! [`TokenService`] owns the signing secret for the lifetime of the process.
//! It is built once at startup from [`JwtConfig`] and shared read-only.
//!
//! # Example
//!
//! ```ignore
//! use quill_auth::TokenService;
//!
//! let tokens = TokenService::from_config(&jwt_config);
//! let token = tokens.issue(42, "alice", 24)?;
//! let claims = tokens.verify(&token)?;
//! assert_eq!(claims.user_id, 42);
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use quill_config::JwtConfig;

use crate::claims::IdentityClaims;
use crate::error::AuthError;

const SECONDS_PER_HOUR: i64 = 3600;

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    default_ttl_hours: i64,
}

impl TokenService {
    pub fn new(secret: &str, default_ttl_hours: i64) -> Self {
        // Time checks happen in `verify_at` against an explicit clock, with no leeway.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "nbf"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            default_ttl_hours,
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(&config.secret, config.expiration_hours)
    }

    pub fn default_ttl_hours(&self) -> i64 {
        self.default_ttl_hours
    }

    /// Issues a token valid from now for `ttl_hours`.
    ///
    /// `ttl_hours` is expected to be positive; it is not clamped here.
    pub fn issue(&self, user_id: i64, username: &str, ttl_hours: i64) -> Result<String, AuthError> {
        self.issue_at(user_id, username, ttl_hours, Utc::now())
    }

    /// Issues a token using the configured lifetime.
    pub fn issue_default(&self, user_id: i64, username: &str) -> Result<String, AuthError> {
        self.issue(user_id, username, self.default_ttl_hours)
    }

    pub fn issue_at(
        &self,
        user_id: i64,
        username: &str,
        ttl_hours: i64,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let iat = now.timestamp();
        let exp = ttl_hours
            .checked_mul(SECONDS_PER_HOUR)
            .and_then(|ttl| iat.checked_add(ttl))
            .ok_or_else(|| AuthError::TokenIssue(format!("ttl of {} hours overflows", ttl_hours)))?;

        let claims = IdentityClaims {
            user_id,
            username: username.to_string(),
            iat,
            nbf: iat,
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenIssue(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<IdentityClaims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies `token` as if the current time were `now`.
    ///
    /// Every failure collapses into [`AuthError::InvalidToken`].
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<IdentityClaims, AuthError> {
        let claims = decode::<IdentityClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(reason = %e, "Token rejected");
                AuthError::InvalidToken
            })?;

        if !claims.is_valid_at(now.timestamp()) {
            tracing::debug!(user_id = claims.user_id, "Token outside its validity window");
            return Err(AuthError::InvalidToken);
        }

        Ok(claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &Algorithm::HS256)
            .field("default_ttl_hours", &self.default_ttl_hours)
            .finish_non_exhaustive()
    }
}
