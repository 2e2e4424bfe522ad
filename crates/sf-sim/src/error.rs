use sf_core::{AgentId, CoreError, Pos};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("{0} shoppers exceeds the AgentId range")]
    TooManyShoppers(usize),

    #[error("shopper at index {expected} carries id {got}")]
    ShopperId {
        expected: AgentId,
        got:      AgentId,
    },

    #[error("shopper {id} placed on non-walkable cell {pos}")]
    ShopperPlacement {
        id:  AgentId,
        pos: Pos,
    },

    #[error("no traffic report yet; run a simulation first")]
    NoReport,

    #[error("layout advisor failed: {0}")]
    Advisory(#[from] AdvisoryError),
}

/// Errors returned by a [`LayoutAdvisor`][crate::LayoutAdvisor].
#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("advisor unavailable: {0}")]
    Unavailable(String),

    #[error("advisor response could not be used: {0}")]
    Response(String),
}

pub type SimResult<T> = Result<T, SimError>;
