/**
 * Responsibility
 *  - core と types を束ねる
 *  - handlers に公開するのは types の alias のみ
 */
mod core;
mod types;

pub use types::*;
