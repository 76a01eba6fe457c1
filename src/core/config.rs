//! Game configuration.
//!
//! A `GameConfig` names the game, who moves first, the subtract-square
//! starting value and the RNG seed for random play. It deserializes from any
//! serde format, so a driver can keep it in a settings file.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::player::Player;
use super::rng::GameRng;
use crate::games::GameKind;
use crate::rules::Game;

/// Setup for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Which game to play.
    pub kind: GameKind,

    /// Player to move first.
    pub first_player: Player,

    /// Subtract-square starting value. Ignored by chopsticks.
    pub starting_value: Option<u32>,

    /// Seed for random strategies.
    /// Same seed produces the same random game.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            kind: GameKind::Chopsticks,
            first_player: Player::P1,
            starting_value: None,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Config for subtract square starting at `value`.
    pub fn subtract_square(value: u32) -> Self {
        Self {
            kind: GameKind::SubtractSquare,
            starting_value: Some(value),
            ..Self::default()
        }
    }

    /// Config for chopsticks.
    pub fn chopsticks() -> Self {
        Self {
            kind: GameKind::Chopsticks,
            ..Self::default()
        }
    }

    /// Set the first player.
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the configured game.
    ///
    /// # Errors
    /// Returns `GameError::MissingStartingValue` for subtract square without
    /// a starting value.
    pub fn build(&self) -> Result<Game> {
        match self.kind {
            GameKind::SubtractSquare => {
                let value = self.starting_value.ok_or(GameError::MissingStartingValue)?;
                Ok(Game::subtract_square(self.first_player, value))
            }
            GameKind::Chopsticks => Ok(Game::chopsticks(self.first_player)),
        }
    }

    /// RNG seeded from this config.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        GameRng::new(self.seed)
    }
}
