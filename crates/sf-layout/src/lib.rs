//! `sf-layout` — floor plans and the grid index.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`cell`]      | `Cell`, `Product`, `Target` and the one-character codec    |
//! | [`plan`]      | `FloorPlan` — text rows repaired to fixed dimensions       |
//! | [`grid`]      | `GridIndex` — classification grid, entrances, locations    |
//! | [`generator`] | `reference_layout` — the default supermarket floor plan    |
//!
//! # Coordinates
//!
//! Text rows are read bottom-up: the last line of a printed plan is
//! simulation row `y = 0` and the first line is `y = height - 1`.  The
//! inversion happens in [`GridIndex::build`] and [`GridIndex::text_row`] and
//! nowhere else.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod cell;
pub mod generator;
pub mod grid;
pub mod plan;

#[cfg(test)]
mod tests;

pub use cell::{Cell, Product, Target};
pub use generator::reference_layout;
pub use grid::GridIndex;
pub use plan::FloorPlan;
