//! Simulation error type.
//!
//! Every variant describes a broken invariant of the puck/spot model.  None
//! of them are retried; callers are expected to surface them and stop.

use thiserror::Error;

use crate::PuckId;

/// The top-level error type for `pp-core` and the coordinator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("no unoccupied parking spot left for {puck}")]
    NoAvailableSpot { puck: PuckId },

    #[error("{0} not found")]
    PuckNotFound(PuckId),

    #[error("{pucks} pucks cannot fit into {spots} parking spots")]
    TooManyPucks { pucks: usize, spots: usize },

    #[error("{occupied} occupied spots do not match {pucks} pucks")]
    OccupancyMismatch { occupied: usize, pucks: usize },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `pp-*` crates.
pub type PathResult<T> = Result<T, PathError>;
