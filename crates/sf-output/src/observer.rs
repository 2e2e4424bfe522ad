//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sf_agent::Shopper;
use sf_core::Tick;
use sf_sim::{Heatmap, SimObserver, TickSummary, TrafficReport};

use crate::row::{AgentSnapshotRow, HeatmapRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries, shopper snapshots and the
/// final heatmap to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
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

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:            summary.tick.0,
            interactions:    summary.interactions,
            heat:            summary.heat,
            peak_congestion: summary.report.peak_congestion,
            dead_spots:      summary.report.dead_spots as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, shoppers: &[Shopper]) {
        let rows: Vec<AgentSnapshotRow> = shoppers
            .iter()
            .map(|s| AgentSnapshotRow {
                agent_id:        s.id().0,
                tick:            tick.0,
                x:               s.pos().x,
                y:               s.pos().y,
                items_remaining: s.shopping_list().len() as u32,
                next_target:     s.target(),
                finished:        s.is_finished(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, heatmap: &Heatmap, _report: &TrafficReport) {
        let rows: Vec<HeatmapRow> = heatmap
            .display_rows()
            .into_iter()
            .enumerate()
            .flat_map(|(row, counters)| {
                counters.into_iter().enumerate().map(move |(col, heat)| HeatmapRow {
                    row: row as u32,
                    col: col as u32,
                    heat,
                })
            })
            .collect();

        let result = self.writer.write_heatmap(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
