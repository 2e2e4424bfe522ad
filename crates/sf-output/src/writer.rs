//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentSnapshotRow, HeatmapRow, OutputResult, TickSummaryRow};

/// A sink for run output.
///
/// Errors are returned here but swallowed by the observer, which keeps the
/// first one for [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of shopper snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the final heatmap, one row per cell.
    fn write_heatmap(&mut self, rows: &[HeatmapRow]) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
