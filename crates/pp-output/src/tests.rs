//! Integration tests for pp-output.

#[cfg(test)]
mod csv_tests {
    use pp_core::Stage;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{PuckSnapshotRow, SpotSnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn puck_row(puck_id: u32, stage: Stage) -> PuckSnapshotRow {
        PuckSnapshotRow {
            stage,
            puck_id,
            sequence:  puck_id,
            x:         180,
            y:         60,
            spot_id:   0,
            processed: false,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("puck_snapshots.csv").exists());
        assert!(dir.path().join("spot_snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("puck_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["stage", "puck_id", "sequence", "x", "y", "spot_id", "processed"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("spot_snapshots.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["stage", "spot_id", "x", "y", "occupied"]);
    }

    #[test]
    fn csv_puck_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![puck_row(0, Stage::Assigned), puck_row(1, Stage::Assigned)];
        w.write_pucks(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("puck_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 2);
        assert_eq!(&read_rows[0][0], "assigned");
        assert_eq!(&read_rows[1][1], "1");   // puck_id
        assert_eq!(&read_rows[1][3], "180"); // x
        assert_eq!(&read_rows[1][6], "0");   // processed
    }

    #[test]
    fn csv_spot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_spots(&[SpotSnapshotRow {
            stage:    Stage::Compacted,
            spot_id:  8,
            x:        420,
            y:        300,
            occupied: true,
        }])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("spot_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "compacted");
        assert_eq!(&read_rows[0][1], "8");
        assert_eq!(&read_rows[0][4], "1"); // occupied
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does_not_exist")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use pp_core::{GridPoint, PathConfig, Stage};
    use pp_sim::CoordinatorBuilder;

    use crate::row::{PuckSnapshotRow, SpotSnapshotRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputResult, PathOutputObserver};

    /// In-memory writer for inspecting what the observer produced.
    #[derive(Default)]
    struct MemWriter {
        pucks:    Vec<PuckSnapshotRow>,
        spots:    Vec<SpotSnapshotRow>,
        finishes: usize,
    }

    impl OutputWriter for MemWriter {
        fn write_pucks(&mut self, rows: &[PuckSnapshotRow]) -> OutputResult<()> {
            self.pucks.extend_from_slice(rows);
            Ok(())
        }
        fn write_spots(&mut self, rows: &[SpotSnapshotRow]) -> OutputResult<()> {
            self.spots.extend_from_slice(rows);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    fn scenario() -> pp_sim::Coordinator {
        CoordinatorBuilder::new(PathConfig::default())
            .initial_pucks(vec![
                GridPoint::new(0, 0),
                GridPoint::new(420, 180),
                GridPoint::new(419, 179),
            ])
            .build()
            .unwrap()
    }

    #[test]
    fn one_snapshot_per_stage() {
        let mut c = scenario();
        let mut obs = PathOutputObserver::new(MemWriter::default());
        c.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.pucks.len(), 4 * 3);
        assert_eq!(w.spots.len(), 4 * 9);
        assert_eq!(w.finishes, 1);
    }

    #[test]
    fn snapshots_track_the_pipeline() {
        let mut c = scenario();
        let mut obs = PathOutputObserver::new(MemWriter::default());
        c.run(&mut obs).unwrap();
        let w = obs.into_writer();

        let populated: Vec<&PuckSnapshotRow> =
            w.pucks.iter().filter(|r| r.stage == Stage::Populated).collect();
        assert_eq!((populated[0].x, populated[0].y), (0, 0));
        assert!(populated.iter().all(|r| r.spot_id == u8::MAX));

        let compacted: Vec<u8> = w
            .spots
            .iter()
            .filter(|r| r.stage == Stage::Compacted && r.occupied)
            .map(|r| r.spot_id)
            .collect();
        assert_eq!(compacted, [6, 7, 8]);

        let processed: Vec<&PuckSnapshotRow> =
            w.pucks.iter().filter(|r| r.stage == Stage::Processed).collect();
        assert!(processed.iter().all(|r| r.processed));
        let sequence: Vec<u32> = processed.iter().map(|r| r.puck_id).collect();
        assert_eq!(sequence, [0, 1, 2]);
    }

    #[test]
    fn integration_csv() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut c = scenario();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = PathOutputObserver::new(writer);
        c.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("puck_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 12, "expected 4 stages × 3 pucks");

        let mut rdr = csv::Reader::from_path(dir.path().join("spot_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 36, "expected 4 stages × 9 spots");
    }
}
