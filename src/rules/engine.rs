//! The game wrapper.
//!
//! A `Game` binds a live `State` to its kind, the player who moved first,
//! the rules text and a move history. It answers the questions a driver
//! asks between moves:
//! - Is the game over?
//! - Has a given player won?
//! - What move does this raw string mean?

use std::fmt;

use im::Vector;
use log::{debug, warn};

use crate::core::{GameError, GameState, Move, MoveRecord, Player, Result};
use crate::games::{
    chopsticks, subtract_square, ChopsticksState, GameKind, State, SubtractSquareState,
};

/// Result of a finished game.
///
/// Two-player and zero-sum: there are no draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
        }
    }

    /// The winning player.
    #[must_use]
    pub fn winner(&self) -> Player {
        match self {
            GameResult::Winner(p) => *p,
        }
    }
}

/// A game in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    kind: GameKind,
    first_player: Player,
    state: State,
    history: Vector<MoveRecord>,
}

impl Game {
    /// Start subtract square at `starting_value`.
    ///
    /// A starting value of zero is legal; the first player has lost already.
    #[must_use]
    pub fn subtract_square(first_player: Player, starting_value: u32) -> Self {
        Self::from_state(SubtractSquareState::new(first_player, starting_value).into())
    }

    /// Start subtract square from a typed-in starting value.
    ///
    /// # Errors
    /// Returns `GameError::InvalidStartingValue` if `raw` is not a
    /// non-negative integer.
    pub fn subtract_square_from_input(first_player: Player, raw: &str) -> Result<Self> {
        let starting_value = subtract_square::parse_starting_value(raw)?;
        Ok(Self::subtract_square(first_player, starting_value))
    }

    /// Start chopsticks from the opening position.
    #[must_use]
    pub fn chopsticks(first_player: Player) -> Self {
        Self::from_state(ChopsticksState::new(first_player).into())
    }

    /// Wrap an arbitrary state. The state's active player is taken as the
    /// first player.
    #[must_use]
    pub fn from_state(state: State) -> Self {
        Self {
            kind: state.kind(),
            first_player: state.active_player(),
            state,
            history: Vector::new(),
        }
    }

    /// Which game this is.
    #[must_use]
    pub fn kind(&self) -> GameKind {
        self.kind
    }

    /// The player who moved first.
    #[must_use]
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// The live state.
    #[must_use]
    pub fn current_state(&self) -> &State {
        &self.state
    }

    /// Rules text for this game.
    #[must_use]
    pub fn instructions(&self) -> &'static str {
        self.kind.instructions()
    }

    /// Every move applied through [`Game::play`], oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Whether `state` has no legal move left.
    #[must_use]
    pub fn is_over(&self, state: &State) -> bool {
        state.possible_moves().is_empty()
    }

    /// Whether `player` has won: the game is over and the stuck side is the
    /// other player. Always false while the game is running.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.is_over(&self.state) && self.state.active_player() != player
    }

    /// The result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_over(&self.state)
            .then(|| GameResult::Winner(self.state.active_player().opponent()))
    }

    /// Turn a raw move string into a move for this game.
    ///
    /// Subtract square parses an integer. Chopsticks strips separators and
    /// maps the rest onto a touch; it never fails, unknown input simply
    /// yields a move that is not legal.
    ///
    /// # Errors
    /// Returns `GameError::MalformedMove` for non-numeric subtract-square
    /// input.
    pub fn str_to_move(&self, raw: &str) -> Result<Move> {
        match self.kind {
            GameKind::SubtractSquare => subtract_square::parse_move(raw).map(Move::Subtract),
            GameKind::Chopsticks => Ok(chopsticks::parse_move(raw)),
        }
    }

    /// Validate `mv` against the live state and, if legal, replace the
    /// state with its successor.
    ///
    /// # Errors
    /// Returns `GameError::IllegalMove` and leaves the game untouched if the
    /// move is not legal.
    pub fn play(&mut self, mv: Move) -> Result<&State> {
        if !self.state.is_valid_move(&mv) {
            warn!("rejected {} move {} at: {}", self.kind, mv, self.state);
            return Err(GameError::IllegalMove {
                mv: mv.to_string(),
                state: self.state.to_string(),
            });
        }

        let player = self.state.active_player();
        let next = self.state.make_move(&mv);
        debug!("{player} played {mv}: {next}");

        let ply = self.history.len();
        self.history.push_back(MoveRecord::new(player, mv, ply));
        self.state = next;
        Ok(&self.state)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "This is a {} game, and it's {}'s turn to move.",
            self.kind,
            self.state.active_player()
        )
    }
}
