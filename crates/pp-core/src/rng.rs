//! Deterministic simulation RNG.
//!
//! One `SmallRng` seeded from the run's master seed drives every random draw
//! (puck count, then x and y per puck, in population order).  The same seed
//! therefore reproduces the same board.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::GridPoint;

/// Simulation-level RNG.  Single-threaded by construction.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A point with both coordinates uniform over `[0, extent]`.
    pub fn grid_point(&mut self, extent: i32) -> GridPoint {
        let x = self.0.gen_range(0..=extent);
        let y = self.0.gen_range(0..=extent);
        GridPoint::new(x, y)
    }
}
