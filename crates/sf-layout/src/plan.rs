//! Textual floor plans and dimension repair.
//!
//! A floor plan arrives as lines of text from an editor, a generator, or an
//! external advisory service.  None of those are trusted to get the
//! dimensions right, so every plan is forced to `width × height` on the way
//! in: long rows and extra rows are truncated, short rows and missing rows
//! are padded with Floor.  Nothing is ever rejected.

use crate::Cell;

/// A floor plan whose rows are guaranteed to be exactly `width` characters
/// and whose row count is exactly `height`.
///
/// Rows are stored in text order (row 0 is the top of the printed plan).
/// Deserialized plans are repaired to their stated dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawPlan"))]
pub struct FloorPlan {
    rows:   Vec<String>,
    width:  usize,
    height: usize,
}

impl FloorPlan {
    /// Repair `rows` to `width × height`.
    ///
    /// Width is counted in `char`s, not bytes.  Applying this to rows that
    /// already have the right shape returns them unchanged.
    pub fn sanitize<S: AsRef<str>>(rows: &[S], width: usize, height: usize) -> FloorPlan {
        let mut fixed: Vec<String> = rows
            .iter()
            .take(height)
            .map(|row| fit_row(row.as_ref(), width))
            .collect();
        while fixed.len() < height {
            fixed.push(Cell::FLOOR.to_string().repeat(width));
        }
        FloorPlan { rows: fixed, width, height }
    }

    /// Build a plan whose dimensions are taken from the input itself: height
    /// is the row count and width is the length of the first row.  Ragged
    /// later rows are repaired to that width.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> FloorPlan {
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        Self::sanitize(rows, width, rows.len())
    }

    /// `true` if `rows` already has exactly `width × height` characters, i.e.
    /// [`sanitize`](Self::sanitize) would not change it.
    pub fn is_well_formed<S: AsRef<str>>(rows: &[S], width: usize, height: usize) -> bool {
        rows.len() == height && rows.iter().all(|r| r.as_ref().chars().count() == width)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows in text order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }

    /// The whole plan as newline-separated text.
    pub fn to_text(&self) -> String {
        self.rows.join("\n")
    }
}

fn fit_row(row: &str, width: usize) -> String {
    let mut out: String = row.chars().take(width).collect();
    let len = out.chars().count();
    if len < width {
        out.extend(std::iter::repeat_n(Cell::FLOOR, width - len));
    }
    out
}

// ── Deserialization ───────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPlan {
    rows:   Vec<String>,
    width:  usize,
    height: usize,
}

#[cfg(feature = "serde")]
impl From<RawPlan> for FloorPlan {
    fn from(raw: RawPlan) -> Self {
        FloorPlan::sanitize(&raw.rows, raw.width, raw.height)
    }
}
