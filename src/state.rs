/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - db: PgPool, verifier: ClaimVerifier (JWKS は起動時に一度だけ読み込む)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::ClaimVerifier;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub verifier: Arc<ClaimVerifier>,
}

impl AppState {
    pub fn new(db: sqlx::PgPool, verifier: Arc<ClaimVerifier>) -> Self {
        Self { db, verifier }
    }
}
