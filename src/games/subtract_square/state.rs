//! Subtract-square state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Moves, Player};

/// Remaining value plus the cached list of legal subtractions.
///
/// `legal_moves` is always the perfect squares `<= value` in ascending
/// order. It is rebuilt on construction and never changed afterwards, and
/// deserializing ignores any serialized list and recomputes it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SubtractSquareFields")]
pub struct SubtractSquareState {
    active_player: Player,
    value: u32,
    legal_moves: Moves<u32>,
}

impl SubtractSquareState {
    /// Create a state with `value` left and `active_player` to move.
    #[must_use]
    pub fn new(active_player: Player, value: u32) -> Self {
        Self {
            active_player,
            value,
            legal_moves: squares_up_to(value),
        }
    }

    /// The remaining value.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The cached legal moves.
    #[must_use]
    pub fn legal_moves(&self) -> &[u32] {
        &self.legal_moves
    }
}

/// Serialized fields that define a state. The move cache is derived.
#[derive(Deserialize)]
struct SubtractSquareFields {
    active_player: Player,
    value: u32,
}

impl From<SubtractSquareFields> for SubtractSquareState {
    fn from(fields: SubtractSquareFields) -> Self {
        Self::new(fields.active_player, fields.value)
    }
}

/// Perfect squares `1, 4, 9, ...` not exceeding `value`.
///
/// Produced in increasing order, so no sort or dedup is needed.
fn squares_up_to(value: u32) -> Moves<u32> {
    let limit = u64::from(value);
    (1u64..)
        .map(|k| k * k)
        .take_while(|&square| square <= limit)
        .map(|square| square as u32)
        .collect()
}

impl GameState for SubtractSquareState {
    type Move = u32;

    fn active_player(&self) -> Player {
        self.active_player
    }

    fn possible_moves(&self) -> Moves<u32> {
        squares_up_to(self.value)
    }

    fn is_valid_move(&self, mv: &u32) -> bool {
        self.legal_moves.contains(mv)
    }

    fn make_move(&self, mv: &u32) -> Self {
        debug_assert!(self.is_valid_move(mv), "{mv} is not legal in {self}");
        Self::new(
            self.active_player.opponent(),
            self.value.saturating_sub(*mv),
        )
    }
}

impl fmt::Display for SubtractSquareState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}'s turn to move; the current value is {}.",
            self.active_player, self.value
        )
    }
}
