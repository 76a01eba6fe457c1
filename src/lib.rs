//! # turn-games
//!
//! Two-player, perfect-information, turn-based games behind one contract.
//!
//! ## Games
//!
//! - **Subtract square**: players take a positive perfect square off a shared
//!   value; whoever cannot move loses.
//! - **Chopsticks**: players add fingers from one of their hands onto an
//!   opponent hand, modulo five; whoever has no legal touch loses.
//!
//! ## Architecture
//!
//! - **Immutable states**: `make_move` returns a fresh state. Every state
//!   caches its legal moves at construction.
//!
//! - **Closed game set**: `games::State` is an enum over the two games, so a
//!   move of the wrong kind is simply invalid.
//!
//! - **Strategies are plain producers**: they propose moves; `rules::Game`
//!   checks legality and `play::PlaySession` re-asks on rejection.
//!
//! ## Modules
//!
//! - `core`: players, moves, errors, RNG, the `GameState` contract, config
//! - `games`: subtract square and chopsticks
//! - `rules`: the `Game` wrapper (win checks, move parsing, history)
//! - `strategy`: interactive and random move producers
//! - `play`: the session loop that plays a game to the end

pub mod core;
pub mod games;
pub mod play;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, GameState, Hand, Move, MoveRecord, Moves, Player, Result,
    Touch,
};

pub use crate::games::{ChopsticksState, GameKind, State, SubtractSquareState};

pub use crate::rules::{Game, GameResult};

pub use crate::strategy::{
    interactive_strategy, random_strategy, Interactive, LineSource, MoveSource, RandomStrategy,
    Strategy,
};

pub use crate::play::{GameRecord, PlayConfig, PlaySession};
