//! Move strategies.
//!
//! A strategy produces the next move for a game. Strategies hold no rules of
//! their own: they read `possible_moves` or hand raw text to
//! `Game::str_to_move`, and legality is checked later by the driver.
//!
//! - [`interactive_strategy`]: ask a [`MoveSource`] for text
//! - [`random_strategy`]: pick uniformly among the legal moves

pub mod interactive;
pub mod random;

use crate::core::{Move, Result};
use crate::rules::Game;

pub use interactive::{interactive_strategy, Interactive, LineSource, MoveSource, MOVE_PROMPT};
pub use random::{random_strategy, RandomStrategy};

/// Something that picks moves for one seat.
pub trait Strategy {
    /// Propose the next move for `game`. The move may be illegal.
    fn choose_move(&mut self, game: &Game) -> Result<Move>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn choose_move(&mut self, game: &Game) -> Result<Move> {
        (**self).choose_move(game)
    }
}
