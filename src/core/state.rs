//! The game-state contract.
//!
//! Every concrete state is an immutable value: `make_move` returns a new
//! state and leaves the receiver untouched, so earlier states stay valid and
//! comparable. Equality is structural over every field, cached move lists
//! included.

use std::fmt;

use super::action::Moves;
use super::player::Player;

/// Operations every concrete game state supports.
///
/// ## Implementation Notes
///
/// - `possible_moves`: pure and deterministically ordered
/// - `is_valid_move`: membership only, a foreign move is just `false`
/// - `make_move`: assumes the caller already checked `is_valid_move`
pub trait GameState: Clone + PartialEq + fmt::Display {
    /// Move type accepted by this state.
    type Move: Clone + PartialEq + fmt::Debug;

    /// The player whose move applies to this state.
    fn active_player(&self) -> Player;

    /// Legal moves for the active player.
    fn possible_moves(&self) -> Moves<Self::Move>;

    /// Whether `mv` is legal here.
    fn is_valid_move(&self, mv: &Self::Move) -> bool {
        self.possible_moves().contains(mv)
    }

    /// Apply a legal move and return the successor state.
    fn make_move(&self, mv: &Self::Move) -> Self;

    /// True when the active player has no legal move (and so has lost).
    fn is_terminal(&self) -> bool {
        self.possible_moves().is_empty()
    }
}
