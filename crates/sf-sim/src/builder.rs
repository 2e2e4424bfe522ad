//! Fluent builder for constructing a [`StoreModel`].

use log::{debug, warn};
use rand::RngCore;

use sf_agent::Shopper;
use sf_core::{AgentId, SimConfig, SimRng};
use sf_layout::{FloorPlan, GridIndex};

use crate::{SimError, SimResult, StoreModel};

/// Fluent builder for [`StoreModel<G>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — dimensions, population, tick counts, seed
/// - floor plan rows — repaired to `config.width × config.height`
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                         |
/// |-----------------|-------------------------------------------------|
/// | `.rng(r)`       | `SimRng::new(config.seed)`                      |
/// | `.shoppers(v)`  | `config.shoppers` shoppers spawned at random entrances |
///
/// # Example
///
/// ```rust,ignore
/// let mut model = StoreModelBuilder::new(config, plan.rows())
///     .rng(SimRng::new(7))
///     .build()?;
/// model.run(&mut NoopObserver);
/// ```
pub struct StoreModelBuilder<G: RngCore = SimRng> {
    config:   SimConfig,
    rows:     Vec<String>,
    rng:      G,
    shoppers: Option<Vec<Shopper>>,
}

impl StoreModelBuilder<SimRng> {
    /// Create a builder seeded from `config.seed`.
    pub fn new<S: AsRef<str>>(config: SimConfig, rows: &[S]) -> Self {
        let rng = SimRng::new(config.seed);
        Self {
            config,
            rows: rows.iter().map(|r| r.as_ref().to_owned()).collect(),
            rng,
            shoppers: None,
        }
    }
}

impl<G: RngCore> StoreModelBuilder<G> {
    /// Replace the random source.  Every draw of the run comes from it.
    pub fn rng<H: RngCore>(self, rng: H) -> StoreModelBuilder<H> {
        StoreModelBuilder {
            config:   self.config,
            rows:     self.rows,
            rng,
            shoppers: self.shoppers,
        }
    }

    /// Supply the population explicitly instead of spawning
    /// `config.shoppers` random ones.
    ///
    /// Shopper `i` must carry `AgentId(i)` and stand on a walkable cell of
    /// the repaired plan.
    pub fn shoppers(mut self, shoppers: Vec<Shopper>) -> Self {
        self.shoppers = Some(shoppers);
        self
    }

    /// Validate inputs, repair the plan, index the grid, spawn the
    /// population, and return a ready-to-run [`StoreModel`].
    pub fn build(mut self) -> SimResult<StoreModel<G>> {
        self.config.validate()?;

        let plan = FloorPlan::sanitize(&self.rows, self.config.width, self.config.height);
        if !FloorPlan::is_well_formed(&self.rows, self.config.width, self.config.height) {
            debug!(
                "floor plan repaired to {}x{} ({} rows supplied)",
                self.config.width,
                self.config.height,
                self.rows.len()
            );
        }
        let grid = GridIndex::build(&plan);
        if grid.entrances().is_empty() {
            warn!("floor plan has no entrance; shoppers spawn at the fallback cell");
        }

        let agents = match self.shoppers.take() {
            Some(agents) => {
                for (i, shopper) in agents.iter().enumerate() {
                    let expected = AgentId::try_from(i)
                        .map_err(|_| SimError::TooManyShoppers(agents.len()))?;
                    if shopper.id() != expected {
                        return Err(SimError::ShopperId { expected, got: shopper.id() });
                    }
                    if !grid.is_walkable(shopper.pos()) {
                        return Err(SimError::ShopperPlacement {
                            id:  shopper.id(),
                            pos: shopper.pos(),
                        });
                    }
                }
                self.config.shoppers = agents.len();
                agents
            }
            None => (0..self.config.shoppers as u32)
                .map(|i| Shopper::spawn(AgentId(i), &grid, &mut self.rng))
                .collect(),
        };

        debug!(
            "store model built: {}x{}, {} entrances, {} targets, {} shoppers",
            grid.width(),
            grid.height(),
            grid.entrances().len(),
            grid.target_count(),
            agents.len()
        );

        Ok(StoreModel::from_parts(self.config, plan, grid, agents, self.rng))
    }
}
