//! Random draws behind a trait seam.
//!
//! The session engine only ever needs uniform integer draws from small
//! inclusive ranges, so that is the whole interface. Production uses a
//! general-purpose PRNG seeded from system entropy at startup; tests
//! substitute scripted sequences to force specific game outcomes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random draws.
pub trait DrawSource {
    /// Draw a uniform integer in the inclusive range `[lo, hi]`.
    fn draw(&mut self, lo: u32, hi: u32) -> u32;
}

/// Entropy-seeded PRNG for real play.
pub struct EntropyDraws {
    rng: StdRng,
}

impl EntropyDraws {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropyDraws {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSource for EntropyDraws {
    fn draw(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.gen_range(lo..=hi)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_draws_stay_in_range() {
        let mut draws = EntropyDraws::new();
        for _ in 0..200 {
            let v = draws.draw(1, 8);
            assert!((1..=8).contains(&v));
        }
        for _ in 0..200 {
            let v = draws.draw(4, 7);
            assert!((4..=7).contains(&v));
        }
    }

    #[test]
    fn test_scripted_draws_replay_in_order() {
        let mut draws = testing::ScriptedDraws::new(&[5, 7, 8]);
        assert_eq!(draws.draw(1, 8), 5);
        assert_eq!(draws.draw(4, 7), 7);
        assert_eq!(draws.draw(1, 8), 8);
        assert_eq!(draws.ranges, vec![(1, 8), (4, 7), (1, 8)]);
    }
}
