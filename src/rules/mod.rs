//! Game wrapper: win checks, move parsing and checked play.

pub mod engine;

pub use engine::{Game, GameResult};
