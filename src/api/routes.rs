/*
 * Responsibility
 * - URL 構造と、handler ごとに必要な permission の対応表
 * - permission gate は handler 単位 (メソッド単位) で掛ける
 * - 未知の path は 404、未対応メソッドは 405 handler へ
 */
use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::api::handlers::{
    actors::{create_actor, delete_actor, list_actors, update_actor},
    fallback::{method_not_allowed, not_found},
    health::{health, welcome},
    movies::{create_movie, delete_movie, list_movies, update_movie},
};
use crate::middleware::auth::access::require;
use crate::services::auth::Permission;
use crate::state::AppState;

pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route(
            "/movies",
            require(get(list_movies), state, Permission::GetMovies).merge(require(
                post(create_movie),
                state,
                Permission::PostMovies,
            )),
        )
        .route(
            "/movies/{movie_id}",
            require(patch(update_movie), state, Permission::EditMovies).merge(require(
                delete(delete_movie),
                state,
                Permission::DeleteMovies,
            )),
        )
        .route(
            "/actors",
            require(get(list_actors), state, Permission::GetActors).merge(require(
                post(create_actor),
                state,
                Permission::PostActors,
            )),
        )
        .route(
            "/actors/{actor_id}",
            require(patch(update_actor), state, Permission::EditActors).merge(require(
                delete(delete_actor),
                state,
                Permission::DeleteActors,
            )),
        )
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}
