//! Simulation time and run configuration.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one pass
//! over the whole shopper population: every agent moves once and interacts
//! once.  There is no wall-clock mapping; a run is measured in ticks only.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// The following tick.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically built with `SimConfig::default()` and a few overrides, or loaded
/// from JSON by the application crate (requires the `serde` feature).  Missing
/// JSON fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Grid width in cells.  Floor plans are repaired to this width.
    pub width: usize,

    /// Grid height in cells.  Floor plans are repaired to this height.
    pub height: usize,

    /// Shopper population, constant for the run's lifetime.
    pub shoppers: usize,

    /// Ticks in one full run.
    pub total_ticks: u64,

    /// Ticks executed back-to-back between progress callbacks.
    pub batch_ticks: u64,

    /// Master RNG seed.  The same seed and floor plan replay identically.
    pub seed: u64,

    /// Take an agent snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width:                 48,
            height:                48,
            shoppers:              50,
            total_ticks:           400,
            batch_ticks:           25,
            seed:                  42,
            output_interval_ticks: 25,
        }
    }
}

impl SimConfig {
    /// The tick at which a full run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Reject configurations the model cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::Config(format!(
                "grid must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(CoreError::Config(format!(
                "grid {}x{} exceeds the coordinate range",
                self.width, self.height
            )));
        }
        if u32::try_from(self.shoppers).is_err() {
            return Err(CoreError::Config(format!("{} shoppers exceeds AgentId range", self.shoppers)));
        }
        if self.batch_ticks == 0 {
            return Err(CoreError::Config("batch_ticks must be at least 1".into()));
        }
        Ok(())
    }
}
