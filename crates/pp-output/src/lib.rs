//! `pp-output` — trace writers for puck_path runs.
//!
//! A run produces one snapshot of the pucks and one of the spots after each
//! pipeline stage (`populated`, `assigned`, `compacted`, `processed`).  The
//! CSV backend writes them to:
//!
//! | File                  | One row per                       |
//! |-----------------------|-----------------------------------|
//! | `puck_snapshots.csv`  | puck, per stage                   |
//! | `spot_snapshots.csv`  | parking spot, per stage           |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`PathOutputObserver`], which implements `pp_sim::PathObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pp_output::{CsvWriter, PathOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = PathOutputObserver::new(writer);
//! coordinator.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::PathOutputObserver;
pub use row::{PuckSnapshotRow, SpotSnapshotRow};
pub use writer::OutputWriter;
