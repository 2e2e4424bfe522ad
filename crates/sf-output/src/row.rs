//! Plain data row types written by output backends.

use sf_layout::Target;

/// One shopper at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub agent_id:        u32,
    pub tick:            u64,
    /// Simulation coordinates (`y = 0` is the bottom line of the plan).
    pub x:               i32,
    pub y:               i32,
    pub items_remaining: u32,
    /// Head of the list, or Checkout once the list is empty.
    pub next_target:     Target,
    pub finished:        bool,
}

/// Figures for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:            u64,
    pub interactions:    u32,
    pub heat:            u64,
    /// Cumulative report after the tick.
    pub peak_congestion: u64,
    pub dead_spots:      u64,
}

/// One heatmap cell, addressed the way the plan is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatmapRow {
    /// Text line, 0 = top.
    pub row:  u32,
    pub col:  u32,
    pub heat: u64,
}
