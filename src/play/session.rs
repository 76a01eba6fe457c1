//! Play session: the move loop around a [`Game`].
//!
//! Each turn asks the active seat's strategy for a move, validates it through
//! `Game::play`, and repeats until the active player is stuck. Illegal or
//! unparseable moves are re-asked up to a limit.

use log::{info, warn};

use crate::core::{GameError, GameState, MoveRecord, Player, Result};
use crate::games::State;
use crate::rules::Game;
use crate::strategy::Strategy;

/// Limits for a play session.
#[derive(Clone, Debug)]
pub struct PlayConfig {
    /// Maximum applied moves before giving up.
    pub max_moves: usize,

    /// Consecutive rejected moves allowed from one seat.
    pub max_illegal_attempts: usize,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            max_moves: 500,
            max_illegal_attempts: 3,
        }
    }
}

impl PlayConfig {
    /// Create a new play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum moves per game.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Set how many rejected moves in a row are tolerated.
    pub fn with_max_illegal_attempts(mut self, attempts: usize) -> Self {
        self.max_illegal_attempts = attempts;
        self
    }
}

/// Outcome of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    /// The player who won.
    pub winner: Player,

    /// Every applied move, oldest first.
    pub moves: Vec<MoveRecord>,

    /// The terminal state.
    pub final_state: State,
}

/// Two seats and the limits to play under.
pub struct PlaySession<A: Strategy, B: Strategy> {
    p1: A,
    p2: B,
    config: PlayConfig,
}

impl<A: Strategy, B: Strategy> PlaySession<A, B> {
    /// Seat `p1` and `p2` with default limits.
    pub fn new(p1: A, p2: B) -> Self {
        Self {
            p1,
            p2,
            config: PlayConfig::default(),
        }
    }

    /// Replace the limits.
    pub fn with_config(mut self, config: PlayConfig) -> Self {
        self.config = config;
        self
    }

    /// Play `game` until someone is stuck.
    ///
    /// # Errors
    /// - `GameError::TooManyIllegalMoves` when a seat keeps proposing moves
    ///   that are illegal or fail to parse
    /// - `GameError::MoveLimit` if the game runs past `max_moves`
    /// - any other error a strategy returns (e.g. closed input)
    pub fn play_out(&mut self, game: &mut Game) -> Result<GameRecord> {
        info!("starting {game}");

        for _ in 0..self.config.max_moves {
            if game.result().is_some() {
                break;
            }
            self.play_turn(game)?;
        }

        let Some(result) = game.result() else {
            return Err(GameError::MoveLimit(self.config.max_moves));
        };

        info!(
            "{} won after {} moves: {}",
            result.winner(),
            game.history().len(),
            game.current_state()
        );

        Ok(GameRecord {
            winner: result.winner(),
            moves: game.history().iter().cloned().collect(),
            final_state: game.current_state().clone(),
        })
    }

    fn play_turn(&mut self, game: &mut Game) -> Result<()> {
        let player = game.current_state().active_player();
        let mut attempts = 0;

        loop {
            let proposed = match player {
                Player::P1 => self.p1.choose_move(game),
                Player::P2 => self.p2.choose_move(game),
            };

            let rejection = match proposed.and_then(|mv| game.play(mv).map(|_| ())) {
                Ok(()) => return Ok(()),
                Err(err @ (GameError::IllegalMove { .. } | GameError::MalformedMove { .. })) => err,
                Err(err) => return Err(err),
            };

            attempts += 1;
            warn!("{player}: {rejection} (attempt {attempts})");
            if attempts >= self.config.max_illegal_attempts {
                return Err(GameError::TooManyIllegalMoves { player, attempts });
            }
        }
    }
}
