//! `sf-agent` — shopper agents for the `shopflow` store simulator.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`list`]    | Essential-item odds table and `generate_shopping_list`      |
//! | [`shopper`] | `Shopper` (move / interact / step), `StepOutcome`, `AgentSnapshot` |
//!
//! # Tick contract
//!
//! A shopper reads the grid through `&GridIndex` and draws randomness from a
//! caller-supplied `Rng`.  It never sees other shoppers, so the order in
//! which the store model steps them only affects which random draws each one
//! consumes.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on snapshot types.       |

pub mod list;
pub mod shopper;


pub use list::{ESSENTIAL_ODDS, VARIETY_PICKS, generate_shopping_list};
pub use shopper::{
    AgentSnapshot, BASE_HEAT, GREEDY_PROBABILITY, INTERACTION_BONUS, Shopper, StepOutcome,
    spawn_point,
};
