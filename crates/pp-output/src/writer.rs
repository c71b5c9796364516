//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, PuckSnapshotRow, SpotSnapshotRow};

/// Trait implemented by trace backends.
///
/// Errors are stored by the observer and retrieved with
/// [`PathOutputObserver::take_error`][crate::PathOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one stage's puck rows.
    fn write_pucks(&mut self, rows: &[PuckSnapshotRow]) -> OutputResult<()>;

    /// Write one stage's spot rows.
    fn write_spots(&mut self, rows: &[SpotSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
