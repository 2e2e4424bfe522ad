//! Grid coordinate type and neighbourhood helpers.
//!
//! `Pos` uses signed `i32` components so neighbour offsets can step off the
//! grid and be rejected by a bounds check instead of wrapping.  `y = 0` is the
//! bottom row of the simulation grid (the last line of the printed plan).

/// Moore-neighbourhood offsets in fixed scan order: `dx` outer, `dy` inner,
/// both from −1 to 1, skipping `(0, 0)`.
///
/// Movement candidates and shelf interaction both scan in this order, so the
/// order is part of the simulation's observable behaviour.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell coordinate on the simulation grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance.
    #[inline]
    pub fn manhattan(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `self` shifted by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Pos {
        Pos::new(self.x + dx, self.y + dy)
    }

    /// The eight surrounding cells in [`MOORE_OFFSETS`] order.  No bounds
    /// check; callers filter against their grid.
    pub fn moore(self) -> impl Iterator<Item = Pos> {
        MOORE_OFFSETS.into_iter().map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// `true` if `0 <= x < width` and `0 <= y < height`.
    #[inline]
    pub fn within(self, width: usize, height: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < width && (self.y as usize) < height
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
