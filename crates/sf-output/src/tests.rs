//! Integration tests for sf-output.

#[cfg(test)]
mod csv_tests {
    use sf_layout::{Product, Target};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, HeatmapRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        rows
    }

    fn headers(dir: &TempDir, file: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        let names = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        names
    }

    fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            agent_id,
            tick,
            x:               agent_id as i32,
            y:               2,
            items_remaining: 1,
            next_target:     Target::Product(Product::Meat),
            finished:        false,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
        assert!(dir.path().join("heatmap.csv").exists());
    }

    #[test]
    fn missing_output_dir_is_created() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("first");
        let mut w = CsvWriter::new(&nested).unwrap();
        w.finish().unwrap();
        assert!(nested.join("heatmap.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir, "agent_snapshots.csv"),
            ["agent_id", "tick", "x", "y", "items_remaining", "next_target", "finished"]
        );
        assert_eq!(
            headers(&dir, "tick_summaries.csv"),
            ["tick", "interactions", "heat", "peak_congestion", "dead_spots"]
        );
        assert_eq!(headers(&dir, "heatmap.csv"), ["row", "col", "heat"]);
    }

    #[test]
    fn snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let mut done = snap_row(2, 5);
        done.items_remaining = 0;
        done.next_target = Target::Checkout;
        done.finished = true;
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5), done]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "agent_snapshots.csv");
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][1], "5");
        assert_eq!(&rows[1][2], "1"); // x
        assert_eq!(&rows[1][5], "Meat");
        assert_eq!(&rows[2][5], "Checkout");
        assert_eq!(&rows[2][6], "1"); // finished
    }

    #[test]
    fn tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = TickSummaryRow {
            tick:            3,
            interactions:    2,
            heat:            60,
            peak_congestion: 14,
            dead_spots:      700,
        };
        w.write_tick_summary(&row).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "tick_summaries.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["3", "2", "60", "14", "700"]);
    }

    #[test]
    fn heatmap_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_heatmap(&[HeatmapRow { row: 0, col: 1, heat: 9 }]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "heatmap.csv");
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["0", "1", "9"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use sf_core::SimConfig;
    use sf_layout::reference_layout;
    use sf_sim::{SimObserver, StoreModelBuilder};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::{AgentSnapshotRow, HeatmapRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn config() -> SimConfig {
        SimConfig {
            width:                 20,
            height:                16,
            shoppers:              4,
            total_ticks:           6,
            batch_ticks:           4,
            seed:                  1,
            output_interval_ticks: 2,
        }
    }

    /// Accepts summaries, fails every heatmap write.
    #[derive(Default)]
    struct BrokenHeatmap {
        summaries: usize,
        finished:  usize,
    }

    impl OutputWriter for BrokenHeatmap {
        fn write_snapshots(&mut self, _rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }

        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.summaries += 1;
            Ok(())
        }

        fn write_heatmap(&mut self, _rows: &[HeatmapRow]) -> OutputResult<()> {
            Err(OutputError::Io(io::Error::other("disk full")))
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Err(OutputError::Io(io::Error::other("second failure")))
        }
    }

    #[test]
    fn integration_csv() {
        let config = config();
        let plan = reference_layout(config.width, config.height);
        let mut model = StoreModelBuilder::new(config, plan.rows()).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        model.run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 6);

        // output_interval = 2 → snapshots at ticks 0, 2, 4 (3 ticks × 4 shoppers)
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 12);

        let mut rdr = csv::Reader::from_path(dir.path().join("heatmap.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 20 * 16);
        let total: u64 = rows.iter().map(|r| r[2].parse::<u64>().unwrap()).sum();
        assert_eq!(total, model.heatmap().total());
    }

    #[test]
    fn heatmap_rows_follow_display_order() {
        let config = config();
        let plan = reference_layout(config.width, config.height);
        let mut model = StoreModelBuilder::new(config, plan.rows()).build().unwrap();

        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        model.run(&mut obs);

        // The entrance sits on text line 1; every shopper's first tick heats it.
        let entrance = model.grid().entrances()[0];
        let line = model.grid().text_row(entrance.y as usize);
        assert_eq!(line, 1);

        let mut rdr = csv::Reader::from_path(dir.path().join("heatmap.csv")).unwrap();
        let heat = rdr
            .records()
            .map(|r| r.unwrap())
            .find(|r| r[0] == *line.to_string() && r[1] == *entrance.x.to_string())
            .map(|r| r[2].parse::<u64>().unwrap());
        assert_eq!(heat, Some(model.heatmap().get(entrance)));
        assert!(heat.unwrap_or(0) >= 4);
    }

    #[test]
    fn first_write_error_is_kept() {
        let config = config();
        let plan = reference_layout(config.width, config.height);
        let mut model = StoreModelBuilder::new(config, plan.rows()).build().unwrap();

        let mut obs = SimOutputObserver::new(BrokenHeatmap::default());
        model.run(&mut obs);

        let err = obs.take_error().expect("heatmap write should fail");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.summaries, 6);
        assert_eq!(writer.finished, 1);
    }

    #[test]
    fn empty_population_writes_no_snapshots() {
        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        obs.on_snapshot(sf_core::Tick(0), &[]);
        obs.into_writer().finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 0);
    }
}
