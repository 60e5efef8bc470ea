/**
 * Responsibility
 *  - リソースごとの「意味付き ID 型」を宣言する
 *  - MovieId を ActorId の位置に渡すと型エラーになる
 */
use super::core::ResourceId;

// movies
pub enum MovieTag {}
pub type MovieId = ResourceId<MovieTag>;

// actors
pub enum ActorTag {}
pub type ActorId = ResourceId<ActorTag>;
