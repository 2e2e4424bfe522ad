//! `sf-output` — run output writers for the shopflow store simulator.
//!
//! The CSV backend creates three files in the output directory:
//!
//! | File                  | One row per                                        |
//! |-----------------------|----------------------------------------------------|
//! | `tick_summaries.csv`  | tick: interactions, heat, peak, dead spots          |
//! | `agent_snapshots.csv` | shopper per snapshot tick: position, list, status   |
//! | `heatmap.csv`         | grid cell at the end of the run, top line first     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `sf_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sf_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! model.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, HeatmapRow, TickSummaryRow};
pub use writer::OutputWriter;
