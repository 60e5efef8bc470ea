/*
 * Responsibility
 * - handler 引数用の extractor
 *   - JsonBody<T>: body の parse 失敗を 400 (AppError) に揃える
 *   - ResourceId<T>: Path の整数 ID、parse 失敗は 404
 */
pub mod json_body;
pub mod resource_id;

pub use json_body::JsonBody;
pub use resource_id::{ActorId, MovieId};
