//! Request helpers for driving the router in tests.

use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use crate::api::routes;
use crate::services::auth::test_support::{app_state, app_state_with, bearer, claims_with, sign};

/// Router over a pool that never connects.
pub fn app() -> Router {
    let state = app_state();
    routes(&state).with_state(state)
}

pub fn app_with(db: PgPool) -> Router {
    let state = app_state_with(db);
    routes(&state).with_state(state)
}

/// `Authorization` header value for a valid token carrying `permissions`.
pub fn token(permissions: Value) -> String {
    bearer(&sign(&claims_with(permissions)))
}

pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    auth: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };

    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn json_body(res: Response) -> Value {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
