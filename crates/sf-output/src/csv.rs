//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `tick_summaries.csv`
//! - `heatmap.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, HeatmapRow, OutputResult, TickSummaryRow};

/// Writes run output to three CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    heatmap:   Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record([
            "agent_id",
            "tick",
            "x",
            "y",
            "items_remaining",
            "next_target",
            "finished",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "interactions", "heat", "peak_congestion", "dead_spots"])?;

        let mut heatmap = Writer::from_path(dir.join("heatmap.csv"))?;
        heatmap.write_record(["row", "col", "heat"])?;

        Ok(Self {
            snapshots,
            summaries,
            heatmap,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.items_remaining.to_string(),
                row.next_target.to_string(),
                (row.finished as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.interactions.to_string(),
            row.heat.to_string(),
            row.peak_congestion.to_string(),
            row.dead_spots.to_string(),
        ])?;
        Ok(())
    }

    fn write_heatmap(&mut self, rows: &[HeatmapRow]) -> OutputResult<()> {
        for row in rows {
            self.heatmap.write_record(&[
                row.row.to_string(),
                row.col.to_string(),
                row.heat.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        self.heatmap.flush()?;
        Ok(())
    }
}
