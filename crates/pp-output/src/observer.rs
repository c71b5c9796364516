//! `PathOutputObserver<W>` — bridges `PathObserver` to an `OutputWriter`.

use pp_core::{ParkingSpot, Puck, SpotId, Stage};
use pp_sim::{PathObserver, RunSummary};

use crate::row::{PuckSnapshotRow, SpotSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`PathObserver`] that writes a puck and a spot snapshot after every
/// stage to any [`OutputWriter`] backend.
///
/// `PathObserver` methods have no return value, so write errors are kept
/// internally.  After `coordinator.run()` returns, check with
/// [`take_error`][Self::take_error].
pub struct PathOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> PathOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any).  `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> PathObserver for PathOutputObserver<W> {
    fn on_stage(&mut self, stage: Stage, pucks: &[Puck], spots: &[ParkingSpot]) {
        let puck_rows: Vec<PuckSnapshotRow> = pucks
            .iter()
            .enumerate()
            .map(|(i, p)| PuckSnapshotRow {
                stage,
                puck_id:   p.id().0,
                sequence:  i as u32,
                x:         p.position().x,
                y:         p.position().y,
                spot_id:   p.spot().unwrap_or(SpotId::INVALID).0,
                processed: p.is_processed(),
            })
            .collect();

        let spot_rows: Vec<SpotSnapshotRow> = spots
            .iter()
            .map(|s| SpotSnapshotRow {
                stage,
                spot_id:  s.id().0,
                x:        s.position().x,
                y:        s.position().y,
                occupied: s.is_occupied(),
            })
            .collect();

        let result = self.writer.write_pucks(&puck_rows);
        self.store_err(result);
        let result = self.writer.write_spots(&spot_rows);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _summary: &RunSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
