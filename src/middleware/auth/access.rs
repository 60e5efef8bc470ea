//! Permission gate: access token 検証 → permission チェック → handler
//!
//! - handler ごとに必要な permission を 1 つ指定する (`get:movies` など)
//! - extract → verify → authorize の順で実行し、最初の失敗で AuthError を返す
//! - 成功時も claims は handler に渡さない (handler は token 由来の引数を受け取らない)
//! - リクエスト間でキャッシュしない

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};

use crate::services::auth::{AuthError, ClaimVerifier, Permission};
use crate::state::AppState;

#[derive(Clone)]
struct PermissionGate {
    verifier: Arc<ClaimVerifier>,
    permission: Permission,
}

/// `method_router` の handler を `permission` で保護する。
///
/// 例：
/// ```ignore
/// .route(
///     "/movies",
///     access::require(get(list_movies), &state, Permission::GetMovies)
///         .merge(access::require(post(create_movie), &state, Permission::PostMovies)),
/// )
/// ```
pub fn require(
    method_router: MethodRouter<AppState>,
    state: &AppState,
    permission: Permission,
) -> MethodRouter<AppState> {
    let gate = PermissionGate {
        verifier: state.verifier.clone(),
        permission,
    };

    // route_layer: 該当メソッドにマッチした時だけ走る (405 fallback には掛からない)
    method_router.route_layer(middleware::from_fn_with_state(gate, permission_gate))
}

async fn permission_gate(
    State(gate): State<PermissionGate>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    match gate.verifier.check(req.headers(), gate.permission) {
        Ok(claims) => {
            tracing::debug!(
                permission = %gate.permission,
                sub = ?claims.get("sub"),
                "request authorized"
            );
        }
        Err(err) => {
            tracing::warn!(
                code = err.code(),
                permission = %gate.permission,
                method = %req.method(),
                path = %req.uri().path(),
                "authorization failed"
            );
            return Err(err);
        }
    }

    Ok(next.run(req).await)
}
