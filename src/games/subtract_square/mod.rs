//! Subtract square.
//!
//! Players alternately subtract a perfect square from a shared value. The
//! player left facing zero has no move and loses.

mod game;
mod state;

pub use game::{parse_move, parse_starting_value, INSTRUCTIONS};
pub use state::SubtractSquareState;
