//! `pp-core` — foundational types for the `puck_path` simulation.
//!
//! This crate is a dependency of every other `pp-*` crate.  It has no `pp-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`ids`]      | `PuckId`, `SpotId`                                      |
//! | [`geo`]      | `GridPoint`, Euclidean distance                         |
//! | [`puck`]     | `Puck`                                                  |
//! | [`spot`]     | `ParkingSpot`, `SPOT_LAYOUT`                            |
//! | [`stage`]    | `Stage` — pipeline stage labels                         |
//! | [`config`]   | `PathConfig`                                            |
//! | [`rng`]      | `SimRng`                                                |
//! | [`error`]    | `PathError`, `PathResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod puck;
pub mod rng;
pub mod spot;
pub mod stage;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PathConfig;
pub use error::{PathError, PathResult};
pub use geo::GridPoint;
pub use ids::{PuckId, SpotId};
pub use puck::Puck;
pub use rng::SimRng;
pub use spot::{ParkingSpot, SPOT_LAYOUT};
pub use stage::Stage;
