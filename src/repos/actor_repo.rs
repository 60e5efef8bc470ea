/*
 * Responsibility
 * - actors テーブル向け SQLx 操作
 * - movie_id の FK 違反は RepoError::ForeignKey として上位へ伝える
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct ActorRow {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub movie_id: Option<i64>,
}

/// Fields that may change on PATCH. `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct ActorChanges<'a> {
    pub name: Option<&'a str>,
    pub age: Option<i32>,
    pub gender: Option<&'a str>,
    pub movie_id: Option<i64>,
}

pub async fn list(db: &PgPool) -> Result<Vec<ActorRow>, RepoError> {
    let rows = sqlx::query_as::<_, ActorRow>(
        r#"
        SELECT id, name, age, gender, movie_id
        FROM actors
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn create(
    db: &PgPool,
    name: &str,
    age: i32,
    gender: &str,
    movie_id: i64,
) -> Result<ActorRow, RepoError> {
    let row = sqlx::query_as::<_, ActorRow>(
        r#"
        INSERT INTO actors (name, age, gender, movie_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, age, gender, movie_id
        "#,
    )
    .bind(name)
    .bind(age)
    .bind(gender)
    .bind(movie_id)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    actor_id: i64,
    changes: ActorChanges<'_>,
) -> Result<Option<ActorRow>, RepoError> {
    let row = sqlx::query_as::<_, ActorRow>(
        r#"
        UPDATE actors
        SET
            name = COALESCE($2, name),
            age = COALESCE($3, age),
            gender = COALESCE($4, gender),
            movie_id = COALESCE($5, movie_id)
        WHERE id = $1
        RETURNING id, name, age, gender, movie_id
        "#,
    )
    .bind(actor_id)
    .bind(changes.name)
    .bind(changes.age)
    .bind(changes.gender)
    .bind(changes.movie_id)
    .fetch_optional(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn exists(db: &PgPool, actor_id: i64) -> Result<bool, RepoError> {
    let found = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM actors WHERE id = $1)")
        .bind(actor_id)
        .fetch_one(db)
        .await?;

    Ok(found)
}

pub async fn delete(db: &PgPool, actor_id: i64) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM actors
        WHERE id = $1
        "#,
    )
    .bind(actor_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
