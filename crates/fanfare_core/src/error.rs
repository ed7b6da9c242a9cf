//! # Engine Error Types
//!
//! All errors that can occur when launching a burst.
//!
//! Note the deliberately small taxonomy: degenerate configurations (zero
//! particles, a single tick, zero gravity) are valid runs, not errors.

use thiserror::Error;

/// Errors that can occur when launching a burst.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The compositor could not provide a 2D draw target.
    #[error("no 2d draw target available from the compositor")]
    SurfaceUnavailable,

    /// The configured palette has no colors to sample from.
    #[error("palette is empty: at least one color is required")]
    EmptyPalette,

    /// A preset or palette failed to parse.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
