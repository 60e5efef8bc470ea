/*
 * Responsibility
 * - API の公開ポイント (routes() の re-export)
 * - URL は `/movies`, `/actors` を root 直下に置く
 */
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;
#[cfg(test)]
pub(crate) mod test_support;

pub use routes::routes;
