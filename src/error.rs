/*
 * Responsibility
 * - アプリ共通の AppError 定義 (認可以外のエラー)
 * - IntoResponse 実装: `{"success": false, "error": <status>, "message": ...}`
 * - RepoError を統一的に変換
 * - 認可エラーは services::auth::AuthError が別の形式で返す
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("resource not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("unprocessable")]
    Unprocessable,
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest(reason.into())
    }

    /// (HTTP status, `error` field, `message` field)
    fn parts(&self) -> (StatusCode, StatusCode, &'static str) {
        match self {
            AppError::BadRequest(_) => (
                StatusCode::BAD_REQUEST,
                StatusCode::BAD_REQUEST,
                "bad request",
            ),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                StatusCode::NOT_FOUND,
                "resource not found",
            ),
            // HTTP 400 with a 405 body, matching the deployed API.
            AppError::MethodNotAllowed => (
                StatusCode::BAD_REQUEST,
                StatusCode::METHOD_NOT_ALLOWED,
                "method not allowed",
            ),
            AppError::Unprocessable => (
                StatusCode::UNPROCESSABLE_ENTITY,
                StatusCode::UNPROCESSABLE_ENTITY,
                "unprocessable",
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error",
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::BadRequest(reason) = &self {
            tracing::debug!(%reason, "bad request");
        }

        let (status, error, message) = self.parts();

        let body = ErrorResponse {
            success: false,
            error: error.as_u16(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::ForeignKey => AppError::Unprocessable,
            RepoError::Db(err) => {
                tracing::error!(error = %err, "database error");
                AppError::Internal
            }
        }
    }
}
