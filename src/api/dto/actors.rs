/*
 * Responsibility
 * - Actors の request/response DTO
 * - age / movie_id は数値でも数値文字列でも受け付ける
 */
use serde::{Deserialize, Serialize};

use super::lenient;
use crate::repos::actor_repo::ActorRow;

#[derive(Debug, Deserialize)]
pub struct CreateActorRequest {
    pub name: String,
    #[serde(deserialize_with = "lenient::int")]
    pub age: i32,
    pub gender: String,
    #[serde(deserialize_with = "lenient::int")]
    pub movie_id: i64,
}

impl CreateActorRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if self.age < 0 {
            return Err("age must not be negative");
        }
        if self.gender.trim().is_empty() {
            return Err("gender is required");
        }

        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateActorRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub movie_id: Option<i64>,
}

impl UpdateActorRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(age) = self.age
            && age < 0
        {
            return Err("age must not be negative");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ActorResponse {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub movie_id: Option<i64>,
}

impl From<ActorRow> for ActorResponse {
    fn from(row: ActorRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            age: row.age,
            gender: row.gender,
            movie_id: row.movie_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActorsResponse {
    pub success: bool,
    pub actors: Vec<ActorResponse>,
}
