/*
 * Responsibility
 * - GET / (welcome) と GET /health (疎通用)
 * - どちらも permission gate を通さない
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn welcome() -> &'static str {
    "Welcome to Udacity Acting Agency!!"
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
