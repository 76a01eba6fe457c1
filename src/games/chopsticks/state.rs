//! Chopsticks state.
//!
//! ## Hands
//!
//! Four values ordered `(p1_left, p1_right, p2_left, p2_right)`, each in
//! `0..=4`. A zero hand is dead: it can neither touch nor be touched.
//!
//! ## Move caches
//!
//! One cached move list per player. A move only refreshes the cache of the
//! player about to move; the other side's list is carried over until it is
//! that player's turn again. Equality compares both caches, so two states
//! with identical hands can differ if they were reached differently.
//!
//! Deserializing goes through [`ChopsticksState::from_hands`]: hands are
//! range-checked and both caches are rebuilt from them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameState, Hand, Moves, Player, Result, Touch};

/// Fingers on a fresh hand.
const STARTING_FINGERS: u8 = 1;

/// A hand reaching this many fingers dies.
const FINGERS_PER_HAND: u8 = 5;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ChopsticksFields")]
pub struct ChopsticksState {
    active_player: Player,
    hands: [u8; 4],
    moves_p1: Moves<Touch>,
    moves_p2: Moves<Touch>,
}

impl ChopsticksState {
    /// Opening position: every hand at one finger.
    #[must_use]
    pub fn new(active_player: Player) -> Self {
        Self {
            active_player,
            hands: [STARTING_FINGERS; 4],
            moves_p1: Touch::ALL.into_iter().collect(),
            moves_p2: Touch::ALL.into_iter().collect(),
        }
    }

    /// Build a position from explicit hands. Both caches are computed fresh.
    ///
    /// # Errors
    /// Returns `GameError::InvalidHands` if a hand is above 4.
    pub fn from_hands(active_player: Player, hands: [u8; 4]) -> Result<Self> {
        if let Some((index, &value)) = hands
            .iter()
            .enumerate()
            .find(|&(_, &v)| v >= FINGERS_PER_HAND)
        {
            return Err(GameError::InvalidHands { index, value });
        }

        Ok(Self {
            active_player,
            hands,
            moves_p1: legal_touches(&hands, Player::P1),
            moves_p2: legal_touches(&hands, Player::P2),
        })
    }

    /// All four hands, `(p1_left, p1_right, p2_left, p2_right)`.
    #[must_use]
    pub fn hands(&self) -> [u8; 4] {
        self.hands
    }

    /// Fingers on one of a player's hands.
    #[must_use]
    pub fn hand(&self, player: Player, hand: Hand) -> u8 {
        self.hands[hand_index(player, hand)]
    }

    /// Legal touches for `player`, computed from the current hands.
    #[must_use]
    pub fn possible_moves_for(&self, player: Player) -> Moves<Touch> {
        legal_touches(&self.hands, player)
    }

    /// The cached move list for `player`. May be stale for the side that
    /// just moved.
    #[must_use]
    pub fn cached_moves(&self, player: Player) -> &[Touch] {
        match player {
            Player::P1 => &self.moves_p1,
            Player::P2 => &self.moves_p2,
        }
    }
}

#[derive(Deserialize)]
struct ChopsticksFields {
    active_player: Player,
    hands: [u8; 4],
}

impl TryFrom<ChopsticksFields> for ChopsticksState {
    type Error = GameError;

    fn try_from(fields: ChopsticksFields) -> Result<Self> {
        Self::from_hands(fields.active_player, fields.hands)
    }
}

fn hand_index(player: Player, hand: Hand) -> usize {
    let base = match player {
        Player::P1 => 0,
        Player::P2 => 2,
    };
    base + hand.offset()
}

/// Touches whose source hand (for `player`) and target hand (on the
/// opponent) are both alive, in canonical order.
fn legal_touches(hands: &[u8; 4], player: Player) -> Moves<Touch> {
    let opponent = player.opponent();
    Touch::ALL
        .into_iter()
        .filter(|t| hands[hand_index(player, t.source())] != 0)
        .filter(|t| hands[hand_index(opponent, t.target())] != 0)
        .collect()
}

impl GameState for ChopsticksState {
    type Move = Touch;

    fn active_player(&self) -> Player {
        self.active_player
    }

    fn possible_moves(&self) -> Moves<Touch> {
        self.possible_moves_for(self.active_player)
    }

    fn make_move(&self, touch: &Touch) -> Self {
        debug_assert!(self.is_valid_move(touch), "{touch} is not legal in {self}");

        let mover = self.active_player;
        let next = mover.opponent();
        let source = self.hands[hand_index(mover, touch.source())];
        let target_index = hand_index(next, touch.target());

        let mut hands = self.hands;
        hands[target_index] = (source + hands[target_index]) % FINGERS_PER_HAND;

        let (moves_p1, moves_p2) = match next {
            Player::P1 => (legal_touches(&hands, Player::P1), self.moves_p2.clone()),
            Player::P2 => (self.moves_p1.clone(), legal_touches(&hands, Player::P2)),
        };

        Self {
            active_player: next,
            hands,
            moves_p1,
            moves_p2,
        }
    }
}

impl fmt::Display for ChopsticksState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [p1_l, p1_r, p2_l, p2_r] = self.hands;
        let (p1_tag, p2_tag) = match self.active_player {
            Player::P1 => (" [Current]", ""),
            Player::P2 => ("", " [Current]"),
        };
        write!(
            f,
            "Player 1{p1_tag}: {p1_l}-{p1_r}; Player 2{p2_tag}: {p2_l}-{p2_r}"
        )
    }
}
