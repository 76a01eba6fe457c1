//! Deterministic random number generation for random play.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical move choices
//! - **Forkable**: Give each seat its own independent stream
//!
//! ```
//! use turn_games::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut p2_rng = rng.fork();
//!
//! let moves = [1, 4, 9];
//! assert!(moves.contains(rng.choose(&moves).unwrap()));
//! assert!(moves.contains(p2_rng.choose(&moves).unwrap()));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used by the random strategy.
///
/// ChaCha8 keeps sequences stable across platforms and releases.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Forks are deterministic: the n-th fork of a given seed always yields
    /// the same sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Choose an element uniformly at random. `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);
        let items: Vec<u32> = (0..100).collect();

        for _ in 0..50 {
            assert_eq!(rng1.choose(&items), rng2.choose(&items));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);
        let items: Vec<u32> = (0..1000).collect();

        let seq1: Vec<_> = (0..10).map(|_| *rng1.choose(&items).unwrap()).collect();
        let seq2: Vec<_> = (0..10).map(|_| *rng2.choose(&items).unwrap()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed(), forked2.seed());
        assert_ne!(forked1.seed(), 42);
    }

    #[test]
    fn test_successive_forks_differ() {
        let mut rng = GameRng::new(7);
        let a = rng.fork();
        let b = rng.fork();
        assert_ne!(a.seed(), b.seed());
    }

    #[test]
    fn test_choose_covers_all_items() {
        let mut rng = GameRng::new(42);
        let items = ["ll", "lr", "rl", "rr"];
        let mut seen = [false; 4];

        for _ in 0..200 {
            let chosen = rng.choose(&items).unwrap();
            let idx = items.iter().position(|i| i == chosen).unwrap();
            seen[idx] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = GameRng::new(42);
        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }
}
