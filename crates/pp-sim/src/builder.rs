//! Fluent builder for constructing a [`Coordinator`].

use pp_core::{GridPoint, PathConfig, PathError, PathResult, SPOT_LAYOUT};

use crate::Coordinator;

/// Fluent builder for [`Coordinator`].
///
/// The built coordinator always has its nine spots laid out.
///
/// # Optional inputs
///
/// | Method                | Default                                         |
/// |-----------------------|-------------------------------------------------|
/// | `.initial_pucks(v)`   | None: `run` draws a random puck set             |
///
/// # Example
///
/// ```rust,ignore
/// let mut coordinator = CoordinatorBuilder::new(PathConfig::default())
///     .initial_pucks(vec![GridPoint::new(0, 0), GridPoint::new(420, 180)])
///     .build()?;
/// coordinator.run(&mut NoopObserver)?;
/// ```
pub struct CoordinatorBuilder {
    config: PathConfig,
    pucks:  Option<Vec<GridPoint>>,
}

impl CoordinatorBuilder {
    pub fn new(config: PathConfig) -> Self {
        Self { config, pucks: None }
    }

    /// Start with pucks at fixed positions instead of random ones.
    ///
    /// At most one puck per spot, and every position must lie on the board.
    pub fn initial_pucks(mut self, positions: Vec<GridPoint>) -> Self {
        self.pucks = Some(positions);
        self
    }

    /// Validate inputs and return a coordinator with spots laid out.
    pub fn build(self) -> PathResult<Coordinator> {
        let mut coordinator = Coordinator::new(self.config)?;
        coordinator.populate_spots();

        if let Some(positions) = self.pucks {
            if positions.len() > SPOT_LAYOUT.len() {
                return Err(PathError::TooManyPucks {
                    pucks: positions.len(),
                    spots: SPOT_LAYOUT.len(),
                });
            }
            let extent = coordinator.config().grid_extent;
            if let Some(off_board) = positions.iter().find(|p| !p.within_extent(extent)) {
                return Err(PathError::Config(format!(
                    "initial puck {off_board} lies outside [0, {extent}]"
                )));
            }
            for position in positions {
                coordinator.add_puck(position);
            }
        }

        Ok(coordinator)
    }
}
