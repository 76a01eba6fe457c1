//! Player identification for two-player games.
//!
//! ## Player
//!
//! Exactly two sides, `P1` and `P2`. Text form is `"p1"` / `"p2"`, which is
//! also what `FromStr` accepts.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GameError;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player one.
    P1,
    /// Player two.
    P2,
}

impl Player {
    /// Both players, in seat order.
    pub const BOTH: [Player; 2] = [Player::P1, Player::P2];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// Short name used in prompts and state summaries.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Player::P1 => "p1",
            Player::P2 => "p2",
        }
    }

    /// Seat number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::P1 => 1,
            Player::P2 => 2,
        }
    }

    /// Map the "is p1 to move" flag to a player.
    ///
    /// ```
    /// use turn_games::core::Player;
    ///
    /// assert_eq!(Player::from_p1_turn(true), Player::P1);
    /// assert_eq!(Player::from_p1_turn(false), Player::P2);
    /// ```
    #[must_use]
    pub const fn from_p1_turn(is_p1_turn: bool) -> Self {
        if is_p1_turn {
            Player::P1
        } else {
            Player::P2
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Player {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "p1" => Ok(Player::P1),
            "p2" => Ok(Player::P2),
            other => Err(GameError::UnknownPlayer(other.to_string())),
        }
    }
}
