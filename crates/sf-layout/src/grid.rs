//! The grid index: classification grid plus location lookups.
//!
//! # Data layout
//!
//! Cells are stored row-major in simulation coordinates:
//!
//! ```text
//! cells[ y * width + x ]
//! ```
//!
//! where `y = 0` is the **last** line of the source text.  The index is built
//! once per floor plan and is read-only afterwards; shoppers borrow it as
//! `&GridIndex` every tick.
//!
//! # Location index
//!
//! `locations` maps each [`Target`] to every cell holding it, in scan order
//! (`y` ascending, then `x` ascending).  Nearest-instance searches break ties
//! by this order, so it must not be re-sorted.

use rustc_hash::FxHashMap;

use sf_core::Pos;

use crate::{Cell, FloorPlan, Target};

/// Immutable classification grid, entrance list, and target locations.
///
/// Do not construct directly; use [`GridIndex::build`].
#[derive(Clone, Debug)]
pub struct GridIndex {
    width:     usize,
    height:    usize,
    cells:     Vec<Cell>,
    entrances: Vec<Pos>,
    locations: FxHashMap<Target, Vec<Pos>>,
}

impl GridIndex {
    /// Classify every character of `plan` and build the lookups.
    ///
    /// Pure and deterministic: identical plans produce identical indexes.
    pub fn build(plan: &FloorPlan) -> GridIndex {
        let (width, height) = (plan.width(), plan.height());
        let mut cells = Vec::with_capacity(width * height);
        let mut entrances = Vec::new();
        let mut locations: FxHashMap<Target, Vec<Pos>> = FxHashMap::default();

        // Reverse text order: the last printed line becomes y = 0.
        for (y, row) in plan.rows().iter().rev().enumerate() {
            for (x, code) in row.chars().enumerate() {
                let cell = Cell::from_code(code);
                let pos = Pos::new(x as i32, y as i32);
                if cell == Cell::Entrance {
                    entrances.push(pos);
                }
                if let Some(target) = cell.target() {
                    locations.entry(target).or_default().push(pos);
                }
                cells.push(cell);
            }
        }

        GridIndex { width, height, cells, entrances, locations }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.within(self.width, self.height)
    }

    /// Row-major offset of an in-bounds `pos`.
    #[inline]
    pub fn offset_of(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }

    // ── Cell queries ──────────────────────────────────────────────────────

    /// Classification at `pos`, or `None` off-grid.
    #[inline]
    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        self.offset_of(pos).map(|i| self.cells[i])
    }

    /// `true` for in-bounds Floor, Entrance and Checkout cells.
    #[inline]
    pub fn is_walkable(&self, pos: Pos) -> bool {
        self.cell(pos).is_some_and(Cell::is_walkable)
    }

    /// All cells in row-major simulation order with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            (Pos::new((i % width) as i32, (i / width) as i32), cell)
        })
    }

    /// Coordinates of every plain Floor cell.
    pub fn floor_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.iter().filter(|&(_, c)| c == Cell::Floor).map(|(p, _)| p)
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Spawn points, in scan order.
    pub fn entrances(&self) -> &[Pos] {
        &self.entrances
    }

    /// Every cell holding `target`, in scan order.  Empty if absent.
    pub fn locations(&self, target: Target) -> &[Pos] {
        self.locations.get(&target).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct targets present on the plan.
    pub fn target_count(&self) -> usize {
        self.locations.len()
    }

    // ── Text boundary ─────────────────────────────────────────────────────

    /// Index of the text line that simulation row `y` came from.
    ///
    /// # Panics
    /// Panics in debug mode if `y >= height`.
    #[inline]
    pub fn text_row(&self, y: usize) -> usize {
        debug_assert!(y < self.height, "row {y} outside a grid of height {}", self.height);
        self.height - 1 - y
    }

    /// Re-encode the grid as text rows (top line first).
    pub fn to_plan(&self) -> FloorPlan {
        let rows: Vec<String> = (0..self.height)
            .rev()
            .map(|y| {
                self.cells[y * self.width..(y + 1) * self.width]
                    .iter()
                    .map(|c| c.code())
                    .collect()
            })
            .collect();
        FloorPlan::sanitize(&rows, self.width, self.height)
    }
}
