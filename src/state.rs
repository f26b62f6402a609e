use std::sync::Arc;

use quill_auth::TokenService;
use sqlx::PgPool;

/// Shared per-process state handed to every handler.
///
/// The token service holds the signing secret; it is built once in `main` and
/// only ever read afterwards.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(db: PgPool, tokens: TokenService) -> Self {
        Self {
            db,
            tokens: Arc::new(tokens),
        }
    }
}
