/*
 * Responsibility
 * - 認可チェーン (extract → verify → authorize) が返す唯一のエラー型
 * - HTTP status + 機械可読な code/description を保持する
 * - IntoResponse で `{"code": ..., "description": ...}` に直列化する
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub const AUTHORIZATION_HEADER_MISSING: &str = "authorization_header_missing";
pub const INVALID_HEADER: &str = "invalid_header";
pub const TOKEN_EXPIRED: &str = "token_expired";
pub const INVALID_CLAIMS: &str = "invalid_claims";
pub const UNAUTHORIZED: &str = "unauthorized";

/// Body sent to the client when authorization fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthErrorBody {
    pub code: &'static str,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} ({}): {}", .error.code, .status_code.as_u16(), .error.description)]
pub struct AuthError {
    pub status_code: StatusCode,
    pub error: AuthErrorBody,
}

impl AuthError {
    fn new(status_code: StatusCode, code: &'static str, description: impl Into<String>) -> Self {
        Self {
            status_code,
            error: AuthErrorBody {
                code,
                description: description.into(),
            },
        }
    }

    pub fn header_missing() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            AUTHORIZATION_HEADER_MISSING,
            "Authorization header is expected",
        )
    }

    pub fn invalid_header(description: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, INVALID_HEADER, description)
    }

    pub fn token_expired() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, TOKEN_EXPIRED, "Token expired")
    }

    pub fn invalid_claims(description: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, INVALID_CLAIMS, description)
    }

    pub fn forbidden() -> Self {
        Self::new(StatusCode::FORBIDDEN, UNAUTHORIZED, "Permission not found")
    }

    pub fn code(&self) -> &'static str {
        self.error.code
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: AuthError) -> (StatusCode, serde_json::Value) {
        let res = err.into_response();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn header_missing_is_401_with_code_and_description() {
        let (status, body) = body_json(AuthError::header_missing()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "authorization_header_missing");
        assert_eq!(body["description"], "Authorization header is expected");
    }

    #[tokio::test]
    async fn forbidden_is_403_unauthorized() {
        let (status, body) = body_json(AuthError::forbidden()).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], "unauthorized");
        assert_eq!(body["description"], "Permission not found");
    }

    #[test]
    fn every_other_kind_is_401() {
        for err in [
            AuthError::invalid_header("x"),
            AuthError::token_expired(),
            AuthError::invalid_claims("x"),
        ] {
            assert_eq!(err.status_code, StatusCode::UNAUTHORIZED);
        }
    }
}
