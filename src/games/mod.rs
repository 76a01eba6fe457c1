//! The two supported games and the closed `State` enum over them.
//!
//! Only two games exist, so dispatch is an exhaustive `match` rather than a
//! trait object. A move of the wrong kind is never valid in a state.

pub mod chopsticks;
pub mod subtract_square;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Move, Moves, Player};

pub use chopsticks::ChopsticksState;
pub use subtract_square::SubtractSquareState;

/// Which game is being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    SubtractSquare,
    Chopsticks,
}

impl GameKind {
    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameKind::SubtractSquare => "subtract square",
            GameKind::Chopsticks => "chopsticks",
        }
    }

    /// Rules text for this game.
    #[must_use]
    pub const fn instructions(self) -> &'static str {
        match self {
            GameKind::SubtractSquare => subtract_square::INSTRUCTIONS,
            GameKind::Chopsticks => chopsticks::INSTRUCTIONS,
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A state of either game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    SubtractSquare(SubtractSquareState),
    Chopsticks(ChopsticksState),
}

impl State {
    /// Which game this state belongs to.
    #[must_use]
    pub fn kind(&self) -> GameKind {
        match self {
            State::SubtractSquare(_) => GameKind::SubtractSquare,
            State::Chopsticks(_) => GameKind::Chopsticks,
        }
    }
}

impl From<SubtractSquareState> for State {
    fn from(state: SubtractSquareState) -> Self {
        State::SubtractSquare(state)
    }
}

impl From<ChopsticksState> for State {
    fn from(state: ChopsticksState) -> Self {
        State::Chopsticks(state)
    }
}

impl GameState for State {
    type Move = Move;

    fn active_player(&self) -> Player {
        match self {
            State::SubtractSquare(s) => s.active_player(),
            State::Chopsticks(s) => s.active_player(),
        }
    }

    fn possible_moves(&self) -> Moves<Move> {
        match self {
            State::SubtractSquare(s) => s
                .possible_moves()
                .into_iter()
                .map(Move::Subtract)
                .collect(),
            State::Chopsticks(s) => s.possible_moves().into_iter().map(Move::Touch).collect(),
        }
    }

    fn is_valid_move(&self, mv: &Move) -> bool {
        match (self, mv) {
            (State::SubtractSquare(s), Move::Subtract(n)) => s.is_valid_move(n),
            (State::Chopsticks(s), Move::Touch(t)) => s.is_valid_move(t),
            _ => false,
        }
    }

    /// # Panics
    /// If `mv` belongs to the other game or is `Move::Unknown`. Callers must
    /// check `is_valid_move` first.
    fn make_move(&self, mv: &Move) -> Self {
        match (self, mv) {
            (State::SubtractSquare(s), Move::Subtract(n)) => {
                State::SubtractSquare(s.make_move(n))
            }
            (State::Chopsticks(s), Move::Touch(t)) => State::Chopsticks(s.make_move(t)),
            (state, mv) => panic!("{mv} is not a {} move", state.kind()),
        }
    }

    fn is_terminal(&self) -> bool {
        match self {
            State::SubtractSquare(s) => s.is_terminal(),
            State::Chopsticks(s) => s.is_terminal(),
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::SubtractSquare(s) => fmt::Display::fmt(s, f),
            State::Chopsticks(s) => fmt::Display::fmt(s, f),
        }
    }
}
