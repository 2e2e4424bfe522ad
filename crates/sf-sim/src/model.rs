//! The `StoreModel` struct and its tick loop.

use log::{debug, info};
use rand::RngCore;
use rand::seq::SliceRandom;

use sf_agent::{AgentSnapshot, Shopper};
use sf_core::{SimConfig, SimRng, Tick};
use sf_layout::{FloorPlan, GridIndex};

use crate::{Heatmap, SimObserver, TickSummary, TrafficReport};

/// Totals for one tick, returned by [`StoreModel::tick`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// The tick that was executed.
    pub tick:         Tick,
    /// Shoppers that took an item off a shelf.
    pub interactions: u32,
    /// Heat folded into the map.
    pub heat:         u64,
}

// ── StoreModel ────────────────────────────────────────────────────────────────

/// The store simulation: one floor plan, a fixed shopper population, and the
/// heatmap they leave behind.
///
/// `StoreModel<G>` is generic over its random source so tests can inject a
/// seeded or mock RNG; it defaults to [`SimRng`].  Every random draw of the
/// run goes through that one source.
///
/// The model is single-owner: every mutating call takes `&mut self`, and a
/// tick runs to completion before returning.
///
/// Create via [`StoreModelBuilder`][crate::StoreModelBuilder].
pub struct StoreModel<G: RngCore = SimRng> {
    /// Run configuration (dimensions, population, tick counts, seed).
    pub config: SimConfig,

    plan:    FloorPlan,
    grid:    GridIndex,
    agents:  Vec<Shopper>,
    heatmap: Heatmap,
    rng:     G,

    /// Next tick to execute.
    now:          Tick,
    interactions: u64,

    /// Activation order buffer, reshuffled every tick.
    order: Vec<usize>,
}

impl<G: RngCore> StoreModel<G> {
    pub(crate) fn from_parts(
        config:  SimConfig,
        plan:    FloorPlan,
        grid:    GridIndex,
        agents:  Vec<Shopper>,
        rng:     G,
    ) -> Self {
        let heatmap = Heatmap::new(grid.width(), grid.height());
        let order = (0..agents.len()).collect();
        Self {
            config,
            plan,
            grid,
            agents,
            heatmap,
            rng,
            now: Tick::ZERO,
            interactions: 0,
            order,
        }
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance every shopper by one tick.
    ///
    /// Shoppers are visited in a fresh uniform permutation; each one's heat
    /// is added at the cell it started the tick on.
    pub fn tick(&mut self) -> TickStats {
        let mut stats = TickStats { tick: self.now, ..TickStats::default() };

        self.order.shuffle(&mut self.rng);
        for &i in &self.order {
            let outcome = self.agents[i].step(&self.grid, &mut self.rng);
            if self.heatmap.add(outcome.origin, u64::from(outcome.heat)) {
                stats.heat += u64::from(outcome.heat);
            }
            if outcome.interacted {
                stats.interactions += 1;
            }
        }

        self.interactions += u64::from(stats.interactions);
        self.now = self.now.next();
        stats
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        let interval = self.config.output_interval_ticks;
        for _ in 0..n {
            let now = self.now;
            observer.on_tick_start(now);
            let stats = self.tick();
            observer.on_tick_end(&TickSummary {
                tick:         now,
                interactions: stats.interactions,
                heat:         stats.heat,
                report:       self.traffic_report(),
            });
            if interval > 0 && now.0 % interval == 0 {
                observer.on_snapshot(now, &self.agents);
            }
        }
    }

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Ticks execute in batches of `config.batch_ticks`; the observer hears
    /// about progress between batches and once more at the end.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let end = self.config.end_tick();
        let batch = self.config.batch_ticks.max(1);
        while self.now < end {
            let n = batch.min(end - self.now);
            self.run_ticks(n, observer);
            observer.on_batch_end(self.now.0, end.0);
            debug!("batch done at {}: {} interactions so far", self.now, self.interactions);
        }

        let report = self.traffic_report();
        info!(
            "run finished at {}: peak {}, dead spots {}, interactions {}",
            self.now, report.peak_congestion, report.dead_spots, self.interactions
        );
        observer.on_sim_end(self.now, &self.heatmap, &report);
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Peak congestion and dead spots over the current heatmap.
    pub fn traffic_report(&self) -> TrafficReport {
        TrafficReport::compute(&self.heatmap, &self.grid)
    }

    /// Zero the heatmap.  Shoppers, grid and tick counter are untouched.
    pub fn reset_heatmap(&mut self) {
        self.heatmap.reset();
        debug!("heatmap reset at {}", self.now);
    }

    pub fn heatmap(&self) -> &Heatmap {
        &self.heatmap
    }

    /// Copy of every shopper's state, in id order.
    pub fn snapshots(&self) -> Vec<AgentSnapshot> {
        self.agents.iter().map(Shopper::snapshot).collect()
    }

    pub fn shoppers(&self) -> &[Shopper] {
        &self.agents
    }

    pub fn grid(&self) -> &GridIndex {
        &self.grid
    }

    /// The repaired floor plan the grid was built from.
    pub fn plan(&self) -> &FloorPlan {
        &self.plan
    }

    /// The next tick to execute (equals the number of ticks run so far).
    pub fn current_tick(&self) -> Tick {
        self.now
    }

    /// Shelf interactions since construction.
    pub fn total_interactions(&self) -> u64 {
        self.interactions
    }

    pub fn population(&self) -> usize {
        self.agents.len()
    }
}
