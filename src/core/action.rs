//! Move representation for both games.
//!
//! A [`Move`] is one of:
//! - `Subtract(n)`: take the perfect square `n` off the subtract-square value
//! - `Touch(t)`: chopsticks, touch an opponent hand with one of your own
//! - `Unknown(s)`: sanitized chopsticks input naming no touch; never legal
//!
//! The unknown case is a value, not an error: `is_valid_move` rejects it
//! like any other illegal move.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Player;

/// Legal-move list. Chopsticks never has more than four moves, and most
/// subtract-square values have few squares, so this rarely allocates.
pub type Moves<M> = SmallVec<[M; 4]>;

/// One of a player's two hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    /// Offset of this hand inside a player's pair of hands.
    #[must_use]
    pub const fn offset(self) -> usize {
        match self {
            Hand::Left => 0,
            Hand::Right => 1,
        }
    }
}

/// A chopsticks move: own hand first, opponent hand second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Touch {
    /// Own left to opponent left.
    LL,
    /// Own left to opponent right.
    LR,
    /// Own right to opponent left.
    RL,
    /// Own right to opponent right.
    RR,
}

impl Touch {
    /// The full move universe in canonical order.
    pub const ALL: [Touch; 4] = [Touch::LL, Touch::LR, Touch::RL, Touch::RR];

    /// The mover's hand.
    #[must_use]
    pub const fn source(self) -> Hand {
        match self {
            Touch::LL | Touch::LR => Hand::Left,
            Touch::RL | Touch::RR => Hand::Right,
        }
    }

    /// The opponent's hand that gets touched.
    #[must_use]
    pub const fn target(self) -> Hand {
        match self {
            Touch::LL | Touch::RL => Hand::Left,
            Touch::LR | Touch::RR => Hand::Right,
        }
    }

    /// Canonical two-letter name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Touch::LL => "ll",
            Touch::LR => "lr",
            Touch::RL => "rl",
            Touch::RR => "rr",
        }
    }

    /// Look up a touch by its canonical name. Exact match only.
    ///
    /// ```
    /// use turn_games::core::Touch;
    ///
    /// assert_eq!(Touch::from_name("rl"), Some(Touch::RL));
    /// assert_eq!(Touch::from_name("RL"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl std::fmt::Display for Touch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A move in either game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Subtract a perfect square from the current value.
    Subtract(u32),
    /// Chopsticks touch.
    Touch(Touch),
    /// Sanitized input that names no known move.
    Unknown(String),
}

impl Move {
    /// The subtracted amount, if this is a subtract-square move.
    #[must_use]
    pub fn as_subtract(&self) -> Option<u32> {
        match self {
            Move::Subtract(n) => Some(*n),
            _ => None,
        }
    }

    /// The touch, if this is a chopsticks move.
    #[must_use]
    pub fn as_touch(&self) -> Option<Touch> {
        match self {
            Move::Touch(t) => Some(*t),
            _ => None,
        }
    }
}

impl From<u32> for Move {
    fn from(n: u32) -> Self {
        Move::Subtract(n)
    }
}

impl From<Touch> for Move {
    fn from(t: Touch) -> Self {
        Move::Touch(t)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Subtract(n) => write!(f, "{n}"),
            Move::Touch(t) => write!(f, "{t}"),
            Move::Unknown(raw) => write!(f, "{raw:?}"),
        }
    }
}

/// An applied move with the player who made it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// The move applied.
    pub mv: Move,

    /// Zero-based ply index within the game.
    pub ply: usize,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: Player, mv: Move, ply: usize) -> Self {
        Self { player, mv, ply }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_hands() {
        assert_eq!(Touch::LL.source(), Hand::Left);
        assert_eq!(Touch::LL.target(), Hand::Left);
        assert_eq!(Touch::LR.source(), Hand::Left);
        assert_eq!(Touch::LR.target(), Hand::Right);
        assert_eq!(Touch::RL.source(), Hand::Right);
        assert_eq!(Touch::RL.target(), Hand::Left);
        assert_eq!(Touch::RR.source(), Hand::Right);
        assert_eq!(Touch::RR.target(), Hand::Right);
    }

    #[test]
    fn test_touch_names_in_canonical_order() {
        let names: Vec<_> = Touch::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["ll", "lr", "rl", "rr"]);
    }

    #[test]
    fn test_touch_from_name() {
        for touch in Touch::ALL {
            assert_eq!(Touch::from_name(touch.name()), Some(touch));
        }
        assert_eq!(Touch::from_name("l r"), None);
        assert_eq!(Touch::from_name("derp"), None);
        assert_eq!(Touch::from_name(""), None);
    }

    #[test]
    fn test_move_accessors() {
        assert_eq!(Move::Subtract(4).as_subtract(), Some(4));
        assert_eq!(Move::Subtract(4).as_touch(), None);
        assert_eq!(Move::Touch(Touch::RR).as_touch(), Some(Touch::RR));
        assert_eq!(Move::Unknown("x".into()).as_subtract(), None);
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::Subtract(16).to_string(), "16");
        assert_eq!(Move::Touch(Touch::LR).to_string(), "lr");
        assert_eq!(Move::Unknown("l?r".into()).to_string(), "\"l?r\"");
    }

    #[test]
    fn test_move_from() {
        assert_eq!(Move::from(9), Move::Subtract(9));
        assert_eq!(Move::from(Touch::RL), Move::Touch(Touch::RL));
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(Player::P2, Move::Touch(Touch::LL), 3);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
