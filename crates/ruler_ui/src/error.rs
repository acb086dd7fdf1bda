//! Error types for scale layout construction.

use thiserror::Error;

/// Errors raised while building a scale layout.
///
/// Runtime interaction (scrolling, toggling) never fails; only the fixed
/// geometry supplied at construction is validated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Pixel density must be a finite, strictly positive number
    #[error("Invalid pixel density {0}: must be finite and greater than zero")]
    InvalidDensity(f32),

    /// Major tick interval of zero would label nothing
    #[error("Major tick interval must be at least 1")]
    ZeroTickInterval,

    /// The scale must cover at least one step
    #[error("Empty scale span: start {start} must be below end {end}")]
    EmptySpan {
        /// First value on the scale
        start: i32,
        /// Last value on the scale
        end: i32,
    },
}
