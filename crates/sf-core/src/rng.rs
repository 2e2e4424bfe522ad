//! The simulation's random source.
//!
//! # Determinism strategy
//!
//! A run owns exactly one random source.  Shopping lists, spawn points,
//! movement jitter and the per-tick activation order all draw from it, in the
//! order the tick loop visits them.  Seeding `SimRng` with the same value and
//! feeding it the same floor plan therefore replays a run exactly.
//!
//! Everything downstream is generic over `rand::RngCore`, so tests can inject
//! any other source (e.g. `rand::rngs::mock::StepRng`) in place of `SimRng`.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seedable run-level RNG.
///
/// Used only from the single thread that owns the store model.  If a caller
/// wants independent streams (e.g. one per repeated run), derive them with
/// [`SimRng::child`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — useful for
    /// seeding back-to-back runs deterministically from one root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed = self.0.next_u64() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }
}

impl RngCore for SimRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}
