//! Run configuration.

use crate::{PathError, PathResult, SPOT_LAYOUT};

/// Top-level configuration for one coordinator run.
///
/// The defaults reproduce the classic exercise: up to nine pucks on a
/// 480 × 480 board, seeded with 42.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathConfig {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Upper bound (inclusive) on the random puck count.  The lower bound is
    /// always 1.  Must not exceed the number of parking spots.
    pub max_pucks: usize,

    /// Random starting coordinates are drawn from `[0, grid_extent]` on both
    /// axes.
    pub grid_extent: i32,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            seed:        42,
            max_pucks:   SPOT_LAYOUT.len(),
            grid_extent: 480,
        }
    }
}

impl PathConfig {
    /// Reject configurations that would break the one-puck-per-spot invariant.
    pub fn validate(&self) -> PathResult<()> {
        if self.max_pucks == 0 || self.max_pucks > SPOT_LAYOUT.len() {
            return Err(PathError::Config(format!(
                "max_pucks must be in 1..={}, got {}",
                SPOT_LAYOUT.len(),
                self.max_pucks
            )));
        }
        if self.grid_extent < 0 {
            return Err(PathError::Config(format!(
                "grid_extent must be non-negative, got {}",
                self.grid_extent
            )));
        }
        Ok(())
    }
}
