//! Boundary to an external layout advisory service.
//!
//! The simulator never talks to a service itself.  It hands the current
//! layout and its traffic report to a [`LayoutAdvisor`] and gets back a
//! candidate layout plus free-text rationale.  Whatever comes back is
//! repaired to the store's dimensions before anyone looks at it.

use sf_layout::FloorPlan;

use crate::{AdvisoryError, TrafficReport};

const SUGGESTIONS_MARKER: &str = "SUGGESTIONS:";
const LAYOUT_MARKER: &str = "LAYOUT:";

/// What an advisor gets to see.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvisoryRequest {
    /// Current layout rows, text order.
    pub layout: Vec<String>,
    /// Report of the most recent run on that layout.
    pub report: TrafficReport,
}

impl AdvisoryRequest {
    pub fn new(plan: &FloorPlan, report: TrafficReport) -> Self {
        Self { layout: plan.rows().to_vec(), report }
    }

    pub fn width(&self) -> usize {
        self.layout.first().map_or(0, |r| r.chars().count())
    }

    pub fn height(&self) -> usize {
        self.layout.len()
    }

    /// Layout followed by the one-line report, the way a text service
    /// expects to read it.
    pub fn to_prompt_text(&self) -> String {
        format!("{}\n\n{}", self.layout.join("\n"), self.report)
    }
}

/// A candidate layout returned by an advisor.
///
/// `rows` are not trusted: call [`sanitized`](Self::sanitized) (or store it
/// through [`Session::set_proposal`][crate::Session::set_proposal]) before
/// building a model from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutProposal {
    pub rows:      Vec<String>,
    /// One entry per suggestion, leading bullet removed.
    pub rationale: Vec<String>,
}

impl LayoutProposal {
    pub fn new(rows: Vec<String>, rationale: Vec<String>) -> Self {
        Self { rows, rationale }
    }

    /// The same proposal with its rows forced to `width × height`.
    pub fn sanitized(self, width: usize, height: usize) -> Self {
        let rows = FloorPlan::sanitize(&self.rows, width, height).into_rows();
        Self { rows, rationale: self.rationale }
    }

    /// The rows as a plan of the given dimensions.
    pub fn to_plan(&self, width: usize, height: usize) -> FloorPlan {
        FloorPlan::sanitize(&self.rows, width, height)
    }

    /// Parse a plain-text advisory response.
    ///
    /// Expected shape:
    ///
    /// ```text
    /// SUGGESTIONS:
    /// - Move Chips next to Soda
    /// - ...
    /// LAYOUT:
    /// ['#####', '#E..#', ...]
    /// ```
    ///
    /// Suggestions are the `-` lines between the two markers.  The layout is
    /// the first bracketed list after `LAYOUT:` (or anywhere, if the marker
    /// is missing); items are split on commas and stripped of whitespace and
    /// one layer of quotes.  If no non-empty row can be recovered the
    /// `fallback` rows are kept.  The result is sanitized to the fallback's
    /// dimensions.
    pub fn parse_response(text: &str, fallback: &FloorPlan) -> Self {
        let rationale = parse_suggestions(text);
        let rows = parse_layout(text).unwrap_or_else(|| fallback.rows().to_vec());
        Self { rows, rationale }.sanitized(fallback.width(), fallback.height())
    }
}

fn parse_suggestions(text: &str) -> Vec<String> {
    let Some((_, after)) = text.split_once(SUGGESTIONS_MARKER) else {
        return Vec::new();
    };
    let section = after.split(LAYOUT_MARKER).next().unwrap_or_default();
    section
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix('-'))
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}

fn parse_layout(text: &str) -> Option<Vec<String>> {
    let body = text.split_once(LAYOUT_MARKER).map_or(text, |(_, after)| after);
    let open = body.find('[')?;
    let rest = &body[open + 1..];
    let close = rest.find(']')?;

    let rows: Vec<String> = rest[..close]
        .split(',')
        .map(|item| strip_quotes(item.trim()).trim().to_owned())
        .filter(|row| !row.is_empty())
        .collect();
    (!rows.is_empty()).then_some(rows)
}

fn strip_quotes(item: &str) -> &str {
    let item = item.strip_prefix(['\'', '"']).unwrap_or(item);
    item.strip_suffix(['\'', '"']).unwrap_or(item)
}

// ── Advisor trait ─────────────────────────────────────────────────────────────

/// An external service that proposes layout changes.
///
/// Implementations own their transport and credentials.  A failure is
/// surfaced as an [`AdvisoryError`]; callers keep the current layout.
pub trait LayoutAdvisor {
    fn propose(&self, request: &AdvisoryRequest) -> Result<LayoutProposal, AdvisoryError>;
}

/// An advisor that proposes the layout it was given, with no rationale.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopAdvisor;

impl LayoutAdvisor for NoopAdvisor {
    fn propose(&self, request: &AdvisoryRequest) -> Result<LayoutProposal, AdvisoryError> {
        Ok(LayoutProposal::new(request.layout.clone(), Vec::new()))
    }
}

impl<A: LayoutAdvisor + ?Sized> LayoutAdvisor for &A {
    fn propose(&self, request: &AdvisoryRequest) -> Result<LayoutProposal, AdvisoryError> {
        (**self).propose(request)
    }
}
