//! `sf-core` — foundational types for the `shopflow` store simulator.
//!
//! This crate is a dependency of every other `sf-*` crate.  It intentionally
//! has no `sf-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`pos`]         | `Pos` grid coordinate, Moore offsets, Manhattan metric |
//! | [`time`]        | `Tick`, `SimConfig`                                   |
//! | [`rng`]         | `SimRng` (the run's single random source)             |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod pos;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use pos::{MOORE_OFFSETS, Pos};
pub use rng::SimRng;
pub use time::{SimConfig, Tick};
