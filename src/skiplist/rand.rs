//! Level generator
//!
//! Geometric tower-height selection. Each list owns its generator, so no
//! global PRNG state exists and a seeded list replays the exact same level
//! sequence, which keeps randomized tests reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable geometric level source
#[derive(Debug)]
pub struct LevelGenerator {
    rng: SmallRng,
    max_level: usize,
    promote: f64,
}

impl LevelGenerator {
    /// Create a generator with promotion probability `promote`, capped at
    /// `max_level`. `seed: None` draws from OS entropy.
    pub fn new(max_level: usize, promote: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            rng,
            max_level,
            promote,
        }
    }

    /// Draw the height for a new node: start at 1, promote with probability
    /// `promote` per level, never exceeding `max_level`
    pub fn next_level(&mut self) -> usize {
        let mut level = 1;
        while level < self.max_level && self.rng.gen::<f64>() < self.promote {
            level += 1;
        }
        level
    }
}
