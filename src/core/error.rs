//! Error types.
//!
//! One error enum for the whole crate. Rule violations, bad input and
//! session guards all surface as a [`GameError`].

use std::num::ParseIntError;

use thiserror::Error;

use super::player::Player;

/// Errors raised while setting up or driving a game.
#[derive(Error, Debug)]
pub enum GameError {
    /// Subtract-square move text that is not a number.
    #[error("malformed move {input:?}: {source}")]
    MalformedMove {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// A move the current state does not allow. The game is unchanged.
    #[error("illegal move {mv} in state: {state}")]
    IllegalMove { mv: String, state: String },

    /// A move was requested from a finished game.
    #[error("no legal moves available")]
    NoLegalMoves,

    /// Starting value text that is not a non-negative integer.
    #[error("invalid starting value {input:?}: {source}")]
    InvalidStartingValue {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// A chopsticks hand above four fingers.
    #[error("hand value {value} at position {index} is outside 0..=4")]
    InvalidHands { index: usize, value: u8 },

    #[error("unknown player {0:?}, expected \"p1\" or \"p2\"")]
    UnknownPlayer(String),

    /// Subtract-square config without a starting value.
    #[error("subtract square needs a starting value")]
    MissingStartingValue,

    /// The session hit its move cap.
    #[error("game did not finish within {0} moves")]
    MoveLimit(usize),

    /// One seat kept proposing rejected moves.
    #[error("{player} made {attempts} illegal moves in a row")]
    TooManyIllegalMoves { player: Player, attempts: usize },

    /// Reading move input failed or hit end of input.
    #[error("failed to read move: {0}")]
    Input(#[from] std::io::Error),
}

/// Convenience Result type for game operations.
pub type Result<T> = std::result::Result<T, GameError>;
