//! Core types shared by every game: players, moves, errors, RNG, the state
//! contract and configuration.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Hand, Move, MoveRecord, Moves, Touch};
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use player::Player;
pub use rng::GameRng;
pub use state::GameState;
