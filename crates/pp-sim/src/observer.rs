//! Observer trait for progress reporting and trace collection.

use pp_core::{GridPoint, ParkingSpot, Puck, PuckId, SpotId, Stage};

use crate::RunSummary;

/// Callbacks invoked by [`Coordinator::run`][crate::Coordinator::run] at key
/// points in the pipeline.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — work counter
///
/// ```rust,ignore
/// struct WorkCounter(usize);
///
/// impl PathObserver for WorkCounter {
///     fn on_work(&mut self, _puck: &Puck) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait PathObserver {
    /// Called once a stage has completed, with read-only access to both
    /// collections.  Pucks are in their current sequence order; spots are in
    /// path order.
    fn on_stage(&mut self, _stage: Stage, _pucks: &[Puck], _spots: &[ParkingSpot]) {}

    /// Called after each nearest-spot assignment.  `from` is the puck's
    /// position before the move, `to` the spot's position.
    fn on_assign(&mut self, _puck: PuckId, _from: GridPoint, _spot: SpotId, _to: GridPoint) {}

    /// Called after the head puck has been marked processed and before the
    /// sequence rotates.
    fn on_work(&mut self, _puck: &Puck) {}

    /// Called once after the final stage.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`PathObserver`] that does nothing.
pub struct NoopObserver;

impl PathObserver for NoopObserver {}
