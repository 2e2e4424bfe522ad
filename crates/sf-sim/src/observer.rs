//! Simulation observer trait for progress reporting and data collection.

use sf_agent::Shopper;
use sf_core::Tick;

use crate::{Heatmap, TrafficReport};

/// Per-tick figures handed to [`SimObserver::on_tick_end`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickSummary {
    pub tick:         Tick,
    /// Shelf interactions completed during this tick.
    pub interactions: u32,
    /// Heat added to the map during this tick.
    pub heat:         u64,
    /// Report over the cumulative heatmap after this tick.
    pub report:       TrafficReport,
}

/// Callbacks invoked by [`StoreModel::run`][crate::StoreModel::run] and
/// [`StoreModel::run_ticks`][crate::StoreModel::run_ticks].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_batch_end(&mut self, done: u64, total: u64) {
///         println!("{:>3.0}%", 100.0 * done as f64 / total as f64);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any shopper moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called every `config.output_interval_ticks` ticks with the whole
    /// population, after the tick has been applied.
    fn on_snapshot(&mut self, _tick: Tick, _shoppers: &[Shopper]) {}

    /// Called after each batch of a full run.  `done` and `total` are tick
    /// counts, so `done / total` is the run's progress.
    fn on_batch_end(&mut self, _done: u64, _total: u64) {}

    /// Called once after the final tick of a full run.
    fn on_sim_end(&mut self, _final_tick: Tick, _heatmap: &Heatmap, _report: &TrafficReport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
