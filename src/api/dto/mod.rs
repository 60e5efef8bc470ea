pub mod actors;
pub mod envelope;
mod lenient;
pub mod movies;
pub mod patch;
