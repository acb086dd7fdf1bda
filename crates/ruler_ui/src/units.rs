//! Type-safe wrappers for scale geometry
//!
//! A scale mixes two kinds of f32: scroll positions in screen pixels and the
//! pixels-per-step density that maps them onto values. These newtypes keep the
//! two apart so an offset is never passed where a density is expected.

use std::fmt;

use crate::constants::STEP_SNAP_EPSILON;
use crate::error::LayoutError;

// =============================================================================
// Pixels
// =============================================================================

/// A distance or scroll position along the scale axis, in pixels.
///
/// # Example
///
/// ```
/// use ruler_ui::Pixels;
///
/// let offset = Pixels::new(305.0);
/// assert_eq!((offset + Pixels::new(5.0)).value(), 310.0);
/// assert_eq!(Pixels::new(-12.0).non_negative(), Pixels::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Pixels(pub f32);

impl Pixels {
    /// Origin of the scroll axis
    pub const ZERO: Self = Self(0.0);

    /// Create a new pixel distance
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw f32 value
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Clamp to `>= 0`. NaN collapses to zero.
    pub fn non_negative(self) -> Self {
        Self(self.0.max(0.0))
    }
}

impl From<f32> for Pixels {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl From<Pixels> for f32 {
    fn from(px: Pixels) -> f32 {
        px.0
    }
}

impl fmt::Display for Pixels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl std::ops::Add for Pixels {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Pixels {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

// =============================================================================
// PixelDensity
// =============================================================================

/// Pixels per scale step (for a height scale, pixels per centimeter).
///
/// Always finite and strictly positive; construction goes through
/// [`PixelDensity::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PixelDensity(f32);

impl PixelDensity {
    /// Create a density, rejecting zero, negative and non-finite values.
    pub fn try_new(pixels_per_step: f32) -> Result<Self, LayoutError> {
        if pixels_per_step.is_finite() && pixels_per_step > 0.0 {
            Ok(Self(pixels_per_step))
        } else {
            Err(LayoutError::InvalidDensity(pixels_per_step))
        }
    }

    /// Get the raw f32 value
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Number of whole steps covered by `offset`, rounded down.
    ///
    /// Quotients within [`STEP_SNAP_EPSILON`] of an integer count as that
    /// integer, so an offset produced by [`PixelDensity::extent`] lands on its
    /// own tick even when the density has no exact f32 form.
    /// Infinite offsets stay infinite; callers clamp before converting.
    pub fn whole_steps(self, offset: Pixels) -> f32 {
        let quotient = f64::from(offset.0) / f64::from(self.0);
        let nearest = quotient.round();
        let steps = if (quotient - nearest).abs() < STEP_SNAP_EPSILON {
            nearest
        } else {
            quotient.floor()
        };
        steps as f32
    }

    /// Pixel length of `steps` steps.
    pub fn extent(self, steps: i32) -> Pixels {
        Pixels(self.0 * steps as f32)
    }
}

impl fmt::Display for PixelDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px/step", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
