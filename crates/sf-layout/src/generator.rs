//! The default supermarket floor plan.
//!
//! Deterministic: the same dimensions always produce the same plan.  All
//! coordinates below are text coordinates (row 0 = top line).

use crate::{Cell, FloorPlan, Product};

/// Distance between the left edges of neighbouring center-store aisles.
const AISLE_PITCH: usize = 5;

/// First aisle column, and the margin kept clear above and below the aisles.
const AISLE_MARGIN: usize = 8;

/// Build the reference layout for a `width × height` store.
///
/// - wall ring around the outside
/// - Meat counter along the second-to-last line
/// - Frozen cases down column 2
/// - double-width center aisles every [`AISLE_PITCH`] columns, striped with
///   center-store products, broken by a two-row cross aisle at mid height
/// - Entrance at the top centre, Checkout near the top-left corner
///
/// Features that do not fit small dimensions are skipped.
pub fn reference_layout(width: usize, height: usize) -> FloorPlan {
    let mut grid = vec![vec![Cell::FLOOR; width]; height];

    for (y, row) in grid.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            if x == 0 || x == width - 1 || y == 0 || y == height - 1 {
                *cell = Cell::WALL;
            }
        }
    }

    if height >= 2 {
        for x in 2..width.saturating_sub(2) {
            set(&mut grid, height - 2, x, Product::Meat.code());
        }
    }

    for y in 5..height.saturating_sub(5) {
        set(&mut grid, y, 2, Product::Frozen.code());
    }

    let mid_y = height / 2;
    let stripes = Product::CENTER_STORE.len();
    for x in (AISLE_MARGIN..width.saturating_sub(AISLE_MARGIN)).step_by(AISLE_PITCH) {
        for y in AISLE_MARGIN..height.saturating_sub(AISLE_MARGIN) {
            if y == mid_y || y + 1 == mid_y {
                continue;
            }
            let code = Product::CENTER_STORE[(y + x) % stripes].code();
            set(&mut grid, y, x, code);
            set(&mut grid, y, x + 1, code);
        }
    }

    set(&mut grid, 1, width / 2, Cell::ENTRANCE);
    set(&mut grid, 4, 5, Cell::CHECKOUT);

    let rows: Vec<String> = grid.into_iter().map(String::from_iter).collect();
    FloorPlan::sanitize(&rows, width, height)
}

/// Write `code` at text `(row, col)`; out-of-range writes are dropped.
fn set(grid: &mut [Vec<char>], row: usize, col: usize, code: char) {
    if let Some(cell) = grid.get_mut(row).and_then(|r| r.get_mut(col)) {
        *cell = code;
    }
}
