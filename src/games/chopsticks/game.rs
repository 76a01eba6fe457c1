//! Chopsticks rules text and move parsing.

use crate::core::{Move, Touch};

/// How to play chopsticks.
pub const INSTRUCTIONS: &str = "Each of 2 players begins with one finger pointed up \
on each of their hands. Player 1 touches one of player 2's hands with one of \
their own, increasing the number of fingers on the touched hand by the number \
on player 1's hand. The number on player 1's hand stays the same. If player 2 \
now has 5 fingers up, that hand is unplayable. If the number of fingers would \
exceed five, subtract 5 from the sum. Keep playing until a player has two \
unplayable hands, thus losing.";

/// Separator characters dropped from raw chopsticks input.
const STRIPPED: [char; 5] = [' ', '-', '_', '+', '/'];

/// Strip separator characters from a raw move.
///
/// Only the separators are removed; everything else is kept as typed and
/// the result is not checked against the legal moves.
///
/// ```
/// use turn_games::games::chopsticks::sanitize;
///
/// assert_eq!(sanitize("l -r"), "lr");
/// assert_eq!(sanitize("l?r"), "l?r");
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| !STRIPPED.contains(c)).collect()
}

/// Sanitize a raw move and map it onto a touch.
///
/// Input that does not name a touch becomes `Move::Unknown`, which no state
/// accepts as legal.
#[must_use]
pub fn parse_move(raw: &str) -> Move {
    let cleaned = sanitize(raw);
    match Touch::from_name(&cleaned) {
        Some(touch) => Move::Touch(touch),
        None => Move::Unknown(cleaned),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("l -r"), "lr");
        assert_eq!(sanitize("rr"), "rr");
        assert_eq!(sanitize("l_+/r"), "lr");
        assert_eq!(sanitize("  "), "");
    }

    #[test]
    fn test_sanitize_keeps_other_characters() {
        assert_eq!(sanitize("l?r"), "l?r");
        assert_eq!(sanitize("L-R"), "LR");
        assert_eq!(sanitize("l\tr"), "l\tr");
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("l - l"), Move::Touch(Touch::LL));
        assert_eq!(parse_move("r/l"), Move::Touch(Touch::RL));
        assert_eq!(parse_move("derp"), Move::Unknown("derp".to_string()));
        assert_eq!(parse_move("L R"), Move::Unknown("LR".to_string()));
    }
}
