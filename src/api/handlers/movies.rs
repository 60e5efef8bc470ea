/*
 * Responsibility
 * - /movies 系 CRUD handler
 * - permission の検証は routes で掛けた gate が済ませている (ここでは見ない)
 * - DTO validation → repo 呼び出し → envelope で返す
 */
use axum::{Json, extract::State};

use crate::{
    api::{
        dto::{
            envelope::{CreatedResponse, DeletedResponse, UpdatedResponse},
            movies::{CreateMovieRequest, MovieResponse, MoviesResponse, UpdateMovieRequest},
            patch::non_empty,
        },
        extractors::{JsonBody, MovieId},
    },
    error::AppError,
    repos::movie_repo,
    state::AppState,
};

pub async fn list_movies(State(state): State<AppState>) -> Result<Json<MoviesResponse>, AppError> {
    let rows = movie_repo::list(&state.db).await?;

    Ok(Json(MoviesResponse {
        success: true,
        movies: rows.into_iter().map(MovieResponse::from).collect(),
    }))
}

pub async fn create_movie(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateMovieRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let row = movie_repo::create(&state.db, &req.title, &req.release_date).await?;
    tracing::info!(movie_id = row.id, "movie created");

    Ok(Json(CreatedResponse::new(row.id)))
}

pub async fn update_movie(
    State(state): State<AppState>,
    movie_id: MovieId,
    body: Result<JsonBody<UpdateMovieRequest>, AppError>,
) -> Result<Json<UpdatedResponse>, AppError> {
    // unknown id is 404 whatever the body holds
    if !movie_repo::exists(&state.db, movie_id.id).await? {
        return Err(AppError::NotFound);
    }
    let JsonBody(req) = body?;

    movie_repo::update(
        &state.db,
        movie_id.id,
        non_empty(&req.title),
        non_empty(&req.release_date),
    )
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(Json(UpdatedResponse::ok()))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    movie_id: MovieId,
) -> Result<Json<DeletedResponse>, AppError> {
    if !movie_repo::delete(&state.db, movie_id.id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(movie_id = movie_id.id, "movie deleted");

    Ok(Json(DeletedResponse::new(movie_id.id)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use sqlx::PgPool;

    use crate::api::test_support::{app_with, json_body, send, token};
    use crate::repos::movie_repo;

    #[sqlx::test(migrations = "./migrations")]
    async fn created_movies_are_listed_in_id_order(db: PgPool) {
        let auth = token(json!(["post:movies", "get:movies"]));

        let mut created = Vec::new();
        for title in ["Train to Busan", "Peninsula"] {
            let body = json!({"title": title, "release_date": "2016-07-20"});
            let res = send(app_with(db.clone()), "POST", "/movies", Some(&auth), Some(body)).await;
            assert_eq!(res.status(), StatusCode::OK);
            let body = json_body(res).await;
            assert_eq!(body["success"], true);
            created.push(body["created"].clone());
        }

        let res = send(app_with(db), "GET", "/movies", Some(&auth), None).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = json_body(res).await;
        assert_eq!(body["success"], true);
        let ids: Vec<Value> = body["movies"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].clone())
            .collect();
        assert_eq!(ids, created);
        assert_eq!(body["movies"][1]["title"], "Peninsula");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn patch_applies_only_non_empty_fields(db: PgPool) {
        let movie = movie_repo::create(&db, "Oldboy", "2003-11-21").await.unwrap();
        let auth = token(json!(["edit:movies"]));

        let res = send(
            app_with(db.clone()),
            "PATCH",
            &format!("/movies/{}", movie.id),
            Some(&auth),
            Some(json!({"title": "", "release_date": "2013-11-27"})),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            json_body(res).await,
            json!({"status-code": 200, "success": true})
        );

        let rows = movie_repo::list(&db).await.unwrap();
        assert_eq!(rows[0].title, "Oldboy");
        assert_eq!(rows[0].release_date, "2013-11-27");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn patch_unknown_movie_is_404_before_body_checks(db: PgPool) {
        let auth = token(json!(["edit:movies"]));
        let bad_body = json!({"title": 5});

        let res = send(
            app_with(db.clone()),
            "PATCH",
            "/movies/404",
            Some(&auth),
            Some(bad_body.clone()),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(res).await["message"], "resource not found");

        let movie = movie_repo::create(&db, "Oldboy", "2003-11-21").await.unwrap();
        let res = send(
            app_with(db),
            "PATCH",
            &format!("/movies/{}", movie.id),
            Some(&auth),
            Some(bad_body),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn delete_reports_id_then_404s(db: PgPool) {
        let movie = movie_repo::create(&db, "Oldboy", "2003-11-21").await.unwrap();
        let auth = token(json!(["delete:movies"]));
        let uri = format!("/movies/{}", movie.id);

        let res = send(app_with(db.clone()), "DELETE", &uri, Some(&auth), None).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            json_body(res).await,
            json!({"success": true, "deleted": movie.id})
        );

        let res = send(app_with(db), "DELETE", &uri, Some(&auth), None).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
