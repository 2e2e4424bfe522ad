//! Cumulative traffic counters.

use sf_core::Pos;

/// A `width × height` grid of non-negative heat counters.
///
/// Addressed in simulation coordinates (`y = 0` is the bottom text line).
/// Counters only grow until [`reset`](Self::reset).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heatmap {
    width:  usize,
    height: usize,
    cells:  Vec<u64>,
}

impl Heatmap {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![0; width * height] }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Counter at `pos`; `0` off-grid.
    #[inline]
    pub fn get(&self, pos: Pos) -> u64 {
        self.offset_of(pos).map_or(0, |i| self.cells[i])
    }

    /// Add `heat` at `pos`.  Returns `false` (and records nothing) off-grid.
    #[inline]
    pub fn add(&mut self, pos: Pos, heat: u64) -> bool {
        match self.offset_of(pos) {
            Some(i) => {
                self.cells[i] += heat;
                true
            }
            None => false,
        }
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        self.cells.fill(0);
    }

    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        self.cells.iter().sum()
    }

    /// Largest counter (0 for an empty map).
    pub fn max(&self) -> u64 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Row-major counters, `y = 0` first.
    pub fn as_slice(&self) -> &[u64] {
        &self.cells
    }

    /// Counters of simulation row `y`.
    ///
    /// # Panics
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[u64] {
        assert!(y < self.height, "row {y} outside a heatmap of height {}", self.height);
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Rows in text order (top line first), ready for a renderer that draws
    /// the floor plan as printed.
    pub fn display_rows(&self) -> Vec<Vec<u64>> {
        (0..self.height).rev().map(|y| self.row(y).to_vec()).collect()
    }

    fn offset_of(&self, pos: Pos) -> Option<usize> {
        pos.within(self.width, self.height)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }
}
