//! Error types for height picker construction.

use ruler_ui::LayoutError;
use thiserror::Error;

/// Errors that can occur while building a picker.
///
/// Scrolling and unit toggling are total; every variant here is a
/// configuration problem caught before the widget exists.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PickerError {
    /// Range bounds out of order or equal
    #[error("Invalid range: minimum {minimum} cm must be below maximum {maximum} cm")]
    InvalidRange {
        /// Requested lower bound
        minimum: i32,
        /// Requested upper bound
        maximum: i32,
    },

    /// Pixel density not finite and positive
    #[error("Invalid pixel density: {0}")]
    InvalidPixelDensity(f32),

    /// Unit toggle index outside the two segments
    #[error("Invalid unit index {0}: expected 0 (metric) or 1 (imperial)")]
    InvalidUnitIndex(usize),

    /// Unrecognized unit name
    #[error("Unknown unit '{0}': expected 'metric' or 'imperial'")]
    UnknownUnit(String),

    /// Tick layout rejected its geometry
    #[error("Layout error: {0}")]
    Layout(LayoutError),
}

impl From<LayoutError> for PickerError {
    fn from(err: LayoutError) -> Self {
        match err {
            LayoutError::InvalidDensity(d) => Self::InvalidPixelDensity(d),
            LayoutError::EmptySpan { start, end } => Self::InvalidRange {
                minimum: start,
                maximum: end,
            },
            other => Self::Layout(other),
        }
    }
}
