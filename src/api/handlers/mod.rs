pub mod actors;
pub mod fallback;
pub mod health;
pub mod movies;
