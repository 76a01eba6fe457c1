//! Random strategy: uniform over the legal moves.

use log::trace;

use super::Strategy;
use crate::core::{GameError, GameRng, GameState, Move, Result};
use crate::rules::Game;

/// Pick one of the current legal moves uniformly at random.
///
/// # Errors
/// Returns `GameError::NoLegalMoves` if the game is already over.
pub fn random_strategy(game: &Game, rng: &mut GameRng) -> Result<Move> {
    let moves = game.current_state().possible_moves();
    let mv = rng.choose(&moves).cloned().ok_or(GameError::NoLegalMoves)?;
    trace!("random pick {mv} from {} moves", moves.len());
    Ok(mv)
}

/// [`Strategy`] that always plays a random legal move.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Random strategy with its own seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Random strategy drawing from an existing RNG (e.g. a fork).
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, game: &Game) -> Result<Move> {
        random_strategy(game, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    #[test]
    fn test_random_move_is_legal() {
        let game = Game::subtract_square(Player::P1, 50);
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            let mv = random_strategy(&game, &mut rng).unwrap();
            assert!(game.current_state().is_valid_move(&mv));
        }
    }

    #[test]
    fn test_random_single_choice() {
        let game = Game::subtract_square(Player::P1, 3);
        let mut rng = GameRng::new(1);
        assert_eq!(random_strategy(&game, &mut rng).unwrap(), Move::Subtract(1));
    }

    #[test]
    fn test_random_on_finished_game() {
        let game = Game::subtract_square(Player::P1, 0);
        let mut rng = GameRng::new(42);
        assert!(matches!(
            random_strategy(&game, &mut rng),
            Err(GameError::NoLegalMoves)
        ));
    }

    #[test]
    fn test_random_strategy_is_deterministic() {
        let game = Game::chopsticks(Player::P1);
        let mut a = RandomStrategy::new(9);
        let mut b = RandomStrategy::new(9);

        for _ in 0..20 {
            assert_eq!(a.choose_move(&game).unwrap(), b.choose_move(&game).unwrap());
        }
    }
}
