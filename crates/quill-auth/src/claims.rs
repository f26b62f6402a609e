//! Identity claims carried inside bearer tokens.

use serde::{Deserialize, Serialize};

/// Signed payload of an access token.
///
/// Timestamps are Unix seconds. A token is valid for `nbf <= now <= exp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Subject: the user's id
    pub user_id: i64,
    /// Display name at the time of issuance
    pub username: String,
    /// Issued-at
    pub iat: i64,
    /// Not-before
    pub nbf: i64,
    /// Expiry
    pub exp: i64,
}

impl IdentityClaims {
    pub fn is_valid_at(&self, now: i64) -> bool {
        self.nbf <= now && now <= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims() -> IdentityClaims {
        IdentityClaims {
            user_id: 42,
            username: "alice".to_string(),
            iat: 1_000,
            nbf: 1_000,
            exp: 4_600,
        }
    }

    #[test]
    fn test_claims_serialize() {
        let serialized = serde_json::to_string(&claims()).unwrap();
        assert!(serialized.contains(r#""user_id":42"#));
        assert!(serialized.contains(r#""username":"alice""#));
        assert!(serialized.contains(r#""nbf":1000"#));
    }

    #[test]
    fn test_claims_missing_expiry_rejected() {
        let json = r#"{"user_id":1,"username":"bob","iat":1,"nbf":1}"#;
        assert!(serde_json::from_str::<IdentityClaims>(json).is_err());
    }

    #[test]
    fn test_validity_window_is_inclusive() {
        let claims = claims();
        assert!(!claims.is_valid_at(999));
        assert!(claims.is_valid_at(1_000));
        assert!(claims.is_valid_at(4_600));
        assert!(!claims.is_valid_at(4_601));
    }
}
