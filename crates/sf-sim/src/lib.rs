//! `sf-sim` — the store model and everything that drives it.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Order   — draw a fresh uniform permutation of the shopper population.
//!   ② Step    — for each shopper in that order: respawn-or-move, interact.
//!   ③ Fold    — add the shopper's heat at its tick-start cell.
//! ```
//!
//! Shoppers only read the immutable [`GridIndex`][sf_layout::GridIndex]; the
//! heatmap is written by the loop alone, so a tick needs no locking.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`heatmap`]  | `Heatmap` — cumulative per-cell counters                 |
//! | [`report`]   | `TrafficReport` — peak congestion and dead spots         |
//! | [`model`]    | `StoreModel` — population, heatmap, tick loop            |
//! | [`builder`]  | `StoreModelBuilder`                                      |
//! | [`observer`] | `SimObserver` hooks, `NoopObserver`, `TickSummary`       |
//! | [`advisory`] | `LayoutAdvisor` boundary, `LayoutProposal`, response parsing |
//! | [`session`]  | `Session` — batched runs and proposed-layout bookkeeping |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sf_core::SimConfig;
//! use sf_layout::reference_layout;
//! use sf_sim::{NoopObserver, StoreModelBuilder};
//!
//! let config = SimConfig::default();
//! let plan = reference_layout(config.width, config.height);
//! let mut model = StoreModelBuilder::new(config, plan.rows()).build()?;
//! model.run(&mut NoopObserver);
//! println!("{}", model.traffic_report());
//! ```

pub mod advisory;
pub mod builder;
pub mod error;
pub mod heatmap;
pub mod model;
pub mod observer;
pub mod report;
pub mod session;


pub use advisory::{AdvisoryRequest, LayoutAdvisor, LayoutProposal, NoopAdvisor};
pub use builder::StoreModelBuilder;
pub use error::{AdvisoryError, SimError, SimResult};
pub use heatmap::Heatmap;
pub use model::{StoreModel, TickStats};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use report::TrafficReport;
pub use session::{RunSummary, Session};
