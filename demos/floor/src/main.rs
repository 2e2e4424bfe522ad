//! floor — run the reference supermarket and print where shoppers went.
//!
//! ```text
//! floor [CONFIG.json] [OUTPUT_DIR]
//! ```
//!
//! Without a config file the defaults are used: a 48×48 store, 50 shoppers,
//! 400 ticks in batches of 25.  CSV output lands in `output/floor` unless a
//! directory is given.  After the first run the layout goes through the
//! advisory round trip (an echoing advisor here) and the store is run again.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};

use sf_agent::Shopper;
use sf_core::{SimConfig, Tick};
use sf_output::{CsvWriter, SimOutputObserver};
use sf_sim::{
    Heatmap, NoopAdvisor, NoopObserver, RunSummary, Session, SimObserver, TickSummary,
    TrafficReport,
};

const DEFAULT_OUTPUT_DIR: &str = "output/floor";

/// Number of cells listed in the hot-spot table.
const HOT_SPOTS: usize = 5;

// ── Progress observer ─────────────────────────────────────────────────────────

/// Prints batch progress and forwards every hook to `inner`.
struct Progress<O: SimObserver> {
    inner:         O,
    summary_rows:  usize,
    snapshot_rows: usize,
}

impl<O: SimObserver> Progress<O> {
    fn new(inner: O) -> Self {
        Self { inner, summary_rows: 0, snapshot_rows: 0 }
    }
}

impl<O: SimObserver> SimObserver for Progress<O> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.summary_rows += 1;
        self.inner.on_tick_end(summary);
    }

    fn on_snapshot(&mut self, tick: Tick, shoppers: &[Shopper]) {
        self.snapshot_rows += shoppers.len();
        self.inner.on_snapshot(tick, shoppers);
    }

    fn on_batch_end(&mut self, done: u64, total: u64) {
        println!("  {:>5.1}%  ({done}/{total} ticks)", 100.0 * done as f64 / total.max(1) as f64);
        self.inner.on_batch_end(done, total);
    }

    fn on_sim_end(&mut self, final_tick: Tick, heatmap: &Heatmap, report: &TrafficReport) {
        self.inner.on_sim_end(final_tick, heatmap, report);
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn print_summary(summary: &RunSummary) {
    println!("Run {}: {} ticks, {} shelf interactions", summary.run, summary.ticks, summary.interactions);
    println!("  {}", summary.report);

    let finished = summary.shoppers.iter().filter(|s| s.finished).count();
    let items: usize = summary.shoppers.iter().map(|s| s.shopping_list.len()).sum();
    println!(
        "  {} shoppers, {} at a checkout, {} items still wanted",
        summary.shoppers.len(),
        finished,
        items
    );

    let heatmap = &summary.heatmap;
    let mut cells: Vec<(usize, usize, u64)> = heatmap
        .display_rows()
        .into_iter()
        .enumerate()
        .flat_map(|(row, counters)| {
            counters.into_iter().enumerate().map(move |(col, heat)| (row, col, heat))
        })
        .filter(|&(_, _, heat)| heat > 0)
        .collect();
    cells.sort_by(|a, b| b.2.cmp(&a.2));

    println!("  {:<6} {:<6} {:>8}", "Row", "Col", "Heat");
    println!("  {}", "-".repeat(22));
    for (row, col, heat) in cells.into_iter().take(HOT_SPOTS) {
        println!("  {row:<6} {col:<6} {heat:>8}");
    }
    println!();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

    let config = load_config(config_path.as_deref())?;
    println!("=== floor — store traffic simulation ===");
    println!(
        "Store: {}x{}  |  Shoppers: {}  |  Ticks: {} (batches of {})  |  Seed: {}",
        config.width, config.height, config.shoppers, config.total_ticks, config.batch_ticks, config.seed
    );
    println!();

    // 1. Session on the reference layout.
    let mut session = Session::new(config)?;
    println!("{}", session.plan().to_text());
    println!();

    // 2. First run, written to CSV.
    let writer = CsvWriter::new(&output_dir)
        .with_context(|| format!("creating output in {}", output_dir.display()))?;
    let mut obs = Progress::new(SimOutputObserver::new(writer));

    let t0 = Instant::now();
    let summary = session.run(&mut obs)?.clone();
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  heatmap.csv         : {} rows", summary.heatmap.as_slice().len());
    println!();
    print_summary(&summary);

    // 3. Advisory round trip.
    let proposal = session.request_proposal(&NoopAdvisor)?;
    let proposal_path = output_dir.join("proposal.json");
    serde_json::to_writer_pretty(File::create(&proposal_path)?, proposal)?;
    println!(
        "Proposal: {} rows, {} suggestions (saved to {})",
        proposal.rows.len(),
        proposal.rationale.len(),
        proposal_path.display()
    );
    for line in &proposal.rationale {
        println!("  - {line}");
    }
    session.apply_proposal();

    // 4. Second run on the applied layout.
    let mut obs = Progress::new(NoopObserver);
    let second = session.run(&mut obs)?;
    print_summary(second);

    let delta = second.report.dead_spots as i64 - summary.report.dead_spots as i64;
    println!("Dead spots changed by {delta:+} between runs.");

    Ok(())
}
