//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `puck_snapshots.csv`
//! - `spot_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PuckSnapshotRow, SpotSnapshotRow};

/// Writes a run trace to two CSV files.
pub struct CsvWriter {
    pucks:    Writer<File>,
    spots:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut pucks = Writer::from_path(dir.join("puck_snapshots.csv"))?;
        pucks.write_record(["stage", "puck_id", "sequence", "x", "y", "spot_id", "processed"])?;

        let mut spots = Writer::from_path(dir.join("spot_snapshots.csv"))?;
        spots.write_record(["stage", "spot_id", "x", "y", "occupied"])?;

        Ok(Self {
            pucks,
            spots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_pucks(&mut self, rows: &[PuckSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.pucks.write_record(&[
                row.stage.as_str().to_owned(),
                row.puck_id.to_string(),
                row.sequence.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.spot_id.to_string(),
                (row.processed as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_spots(&mut self, rows: &[SpotSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.spots.write_record(&[
                row.stage.as_str().to_owned(),
                row.spot_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                (row.occupied as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.pucks.flush()?;
        self.spots.flush()?;
        Ok(())
    }
}
