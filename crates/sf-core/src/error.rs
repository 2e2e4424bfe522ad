//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where configuration problems can bubble up.

use thiserror::Error;

/// The base error type for `sf-core` and a common source for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `sf-core`.
pub type CoreResult<T> = Result<T, CoreError>;
