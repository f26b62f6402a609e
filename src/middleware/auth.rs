//! Bearer-token authentication for protected routes.
//!
//! [`require_auth`] is attached with `route_layer` to every router that needs
//! an identity. It verifies the token, stores an [`AuthUser`] in the request
//! extensions and only then calls the handler. Handlers pick the identity up
//! through the [`AuthUser`] extractor.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use quill_auth::IdentityClaims;
use quill_core::AppError;

use crate::state::AppState;

/// Identity of the caller, as proven by a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
    pub username: String,
}

impl From<IdentityClaims> for AuthUser {
    fn from(claims: IdentityClaims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username,
        }
    }
}

/// Pulls the token out of `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authorization header".to_string()))?;

    // Auth schemes are case-insensitive.
    auth_header
        .split_once(' ')
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::unauthorized("Invalid authorization header format".to_string()))
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = {
        let token = bearer_token(req.headers())?;
        state.tokens.verify(token)?
    };

    let auth_user = AuthUser::from(claims);
    req.extensions_mut().insert(auth_user);

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only present when require_auth ran for this route.
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("User not authenticated".to_string()))
    }
}
