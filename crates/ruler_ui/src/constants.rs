//! Centralized constants for ruler_ui

/// Every n-th step of a scale gets major styling and a label
pub const DEFAULT_MAJOR_TICK_INTERVAL: u32 = 10;

/// Default pixels per scale step
pub const DEFAULT_PIXEL_DENSITY: f32 = 10.0;

/// Distance from an integer, in steps, below which an offset/density
/// quotient snaps to that integer
pub const STEP_SNAP_EPSILON: f64 = 1e-4;
