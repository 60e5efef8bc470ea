/*
 * Responsibility
 * - /actors 系 CRUD handler
 * - movie_id が存在しない movie を指す場合は repo が ForeignKey を返し 422 になる
 */
use axum::{Json, extract::State};

use crate::{
    api::{
        dto::{
            actors::{ActorResponse, ActorsResponse, CreateActorRequest, UpdateActorRequest},
            envelope::{CreatedResponse, DeletedResponse, UpdatedResponse},
            patch::{non_empty, non_zero},
        },
        extractors::{ActorId, JsonBody},
    },
    error::AppError,
    repos::actor_repo::{self, ActorChanges},
    state::AppState,
};

pub async fn list_actors(State(state): State<AppState>) -> Result<Json<ActorsResponse>, AppError> {
    let rows = actor_repo::list(&state.db).await?;

    Ok(Json(ActorsResponse {
        success: true,
        actors: rows.into_iter().map(ActorResponse::from).collect(),
    }))
}

pub async fn create_actor(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateActorRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let row = actor_repo::create(&state.db, &req.name, req.age, &req.gender, req.movie_id).await?;
    tracing::info!(actor_id = row.id, "actor created");

    Ok(Json(CreatedResponse::new(row.id)))
}

pub async fn update_actor(
    State(state): State<AppState>,
    actor_id: ActorId,
    body: Result<JsonBody<UpdateActorRequest>, AppError>,
) -> Result<Json<UpdatedResponse>, AppError> {
    if !actor_repo::exists(&state.db, actor_id.id).await? {
        return Err(AppError::NotFound);
    }
    let JsonBody(req) = body?;
    req.validate().map_err(AppError::bad_request)?;

    let changes = ActorChanges {
        name: non_empty(&req.name),
        age: non_zero(req.age),
        gender: non_empty(&req.gender),
        movie_id: non_zero(req.movie_id),
    };

    actor_repo::update(&state.db, actor_id.id, changes)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(UpdatedResponse::ok()))
}

pub async fn delete_actor(
    State(state): State<AppState>,
    actor_id: ActorId,
) -> Result<Json<DeletedResponse>, AppError> {
    if !actor_repo::delete(&state.db, actor_id.id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(actor_id = actor_id.id, "actor deleted");

    Ok(Json(DeletedResponse::new(actor_id.id)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::PgPool;

    use crate::api::test_support::{app_with, json_body, send, token};
    use crate::repos::{actor_repo, movie_repo};

    #[sqlx::test(migrations = "./migrations")]
    async fn create_accepts_numeric_strings(db: PgPool) {
        let movie = movie_repo::create(&db, "Parasite", "2019-05-30").await.unwrap();
        let auth = token(json!(["post:actors", "get:actors"]));

        let body = json!({
            "name": "Park So-dam",
            "age": "28",
            "gender": "female",
            "movie_id": movie.id.to_string(),
        });
        let res = send(app_with(db.clone()), "POST", "/actors", Some(&auth), Some(body)).await;
        assert_eq!(res.status(), StatusCode::OK);
        let created = json_body(res).await["created"].clone();

        let res = send(app_with(db), "GET", "/actors", Some(&auth), None).await;
        let body = json_body(res).await;
        assert_eq!(
            body["actors"],
            json!([{
                "id": created,
                "name": "Park So-dam",
                "age": 28,
                "gender": "female",
                "movie_id": movie.id,
            }])
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn unknown_movie_reference_is_422(db: PgPool) {
        let body = json!({"name": "Gong Yoo", "age": 39, "gender": "male", "movie_id": 999});
        let res = send(
            app_with(db.clone()),
            "POST",
            "/actors",
            Some(&token(json!(["post:actors"]))),
            Some(body),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            json_body(res).await,
            json!({"success": false, "error": 422, "message": "unprocessable"})
        );

        let movie = movie_repo::create(&db, "Train to Busan", "2016-07-20").await.unwrap();
        let actor = actor_repo::create(&db, "Gong Yoo", 39, "male", movie.id)
            .await
            .unwrap();
        let res = send(
            app_with(db),
            "PATCH",
            &format!("/actors/{}", actor.id),
            Some(&token(json!(["edit:actors"]))),
            Some(json!({"movie_id": 999})),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn patch_ignores_empty_and_zero_values(db: PgPool) {
        let movie = movie_repo::create(&db, "Train to Busan", "2016-07-20").await.unwrap();
        let actor = actor_repo::create(&db, "Gong Yoo", 39, "male", movie.id)
            .await
            .unwrap();

        let res = send(
            app_with(db.clone()),
            "PATCH",
            &format!("/actors/{}", actor.id),
            Some(&token(json!(["edit:actors"]))),
            Some(json!({"name": "", "age": 0, "gender": "", "movie_id": 0})),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);

        let rows = actor_repo::list(&db).await.unwrap();
        assert_eq!(rows[0].name, "Gong Yoo");
        assert_eq!(rows[0].age, 39);
        assert_eq!(rows[0].movie_id, Some(movie.id));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn patch_unknown_actor_is_404_before_validation(db: PgPool) {
        let res = send(
            app_with(db),
            "PATCH",
            "/actors/404",
            Some(&token(json!(["edit:actors"]))),
            Some(json!({"age": -1})),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn deleted_movie_leaves_actor_unassigned(db: PgPool) {
        let movie = movie_repo::create(&db, "Train to Busan", "2016-07-20").await.unwrap();
        let actor = actor_repo::create(&db, "Ma Dong-seok", 47, "male", movie.id)
            .await
            .unwrap();

        let res = send(
            app_with(db.clone()),
            "DELETE",
            &format!("/movies/{}", movie.id),
            Some(&token(json!(["delete:movies"]))),
            None,
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = send(
            app_with(db.clone()),
            "GET",
            "/actors",
            Some(&token(json!(["get:actors"]))),
            None,
        )
        .await;
        let body = json_body(res).await;
        assert_eq!(body["actors"][0]["id"], actor.id);
        assert_eq!(body["actors"][0]["movie_id"], json!(null));

        let res = send(
            app_with(db),
            "DELETE",
            "/actors/404",
            Some(&token(json!(["delete:actors"]))),
            None,
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
