//! Global constants for the height picker

/// Default lower bound of the selectable range, in centimeters
pub const DEFAULT_MINIMUM_CM: i32 = 120;

/// Default upper bound of the selectable range, in centimeters
pub const DEFAULT_MAXIMUM_CM: i32 = 220;

/// Inches per centimeter used by the feet/inches readout
pub const INCHES_PER_CM: f64 = 0.393701;

/// Inches per foot
pub const INCHES_PER_FOOT: i32 = 12;

/// Suffix shown after a metric readout
pub const METRIC_SUFFIX: &str = "cm";

/// Viewport height assumed by the interactive binary
pub const DEMO_VIEWPORT_HEIGHT: f32 = 400.0;
