//! Subtract-square rules text and move parsing.

use crate::core::{GameError, Result};

/// How to play subtract square.
pub const INSTRUCTIONS: &str = "A non-negative whole number is chosen as the starting value. \
The player whose turn it is chooses a perfect square that is no larger than \
the current value and subtracts it. The result becomes the new value, and \
the other player chooses a square to subtract from it. Play alternates \
until no move is possible. Whoever is about to play at that point loses!";

/// Parse a raw move as a base-10 integer.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
/// Returns `GameError::MalformedMove` if the input is not a number.
pub fn parse_move(raw: &str) -> Result<u32> {
    raw.trim().parse().map_err(|source| GameError::MalformedMove {
        input: raw.to_string(),
        source,
    })
}

/// Parse the starting value for a new game.
///
/// # Errors
/// Returns `GameError::InvalidStartingValue` if the input is not a
/// non-negative integer.
pub fn parse_starting_value(raw: &str) -> Result<u32> {
    raw.trim()
        .parse()
        .map_err(|source| GameError::InvalidStartingValue {
            input: raw.to_string(),
            source,
        })
}
