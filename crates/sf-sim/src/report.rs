//! Summary statistics over a heatmap.

use std::fmt;

use sf_layout::{Cell, GridIndex};

use crate::Heatmap;

/// Peak congestion and dead-spot count for one heatmap.
///
/// A pure function of the heatmap and the grid; never cached.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficReport {
    /// Highest counter anywhere on the grid.
    pub peak_congestion: u64,
    /// Plain Floor cells with a counter of exactly zero.  Entrances,
    /// checkouts, walls and shelves never count.
    pub dead_spots: usize,
}

impl TrafficReport {
    pub fn compute(heatmap: &Heatmap, grid: &GridIndex) -> Self {
        let dead_spots = grid
            .iter()
            .filter(|&(pos, cell)| cell == Cell::Floor && heatmap.get(pos) == 0)
            .count();
        Self { peak_congestion: heatmap.max(), dead_spots }
    }
}

impl fmt::Display for TrafficReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Max Traffic: {}, Unvisited Floor Tiles: {}",
            self.peak_congestion, self.dead_spots
        )
    }
}
