//! Centimeter and feet/inches conversion.
//!
//! Conversions truncate rather than round: 23.9 inches reads as 23, matching
//! how heights are conventionally quoted.

use crate::constants::{INCHES_PER_CM, INCHES_PER_FOOT};

/// A height in whole feet and whole inches (`inches < 12`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeetInches {
    pub feet: i32,
    pub inches: i32,
}

impl FeetInches {
    pub fn new(feet: i32, inches: i32) -> Self {
        Self { feet, inches }
    }
}

impl From<(i32, i32)> for FeetInches {
    fn from((feet, inches): (i32, i32)) -> Self {
        Self::new(feet, inches)
    }
}

/// Convert centimeters to truncated feet and inches.
pub fn to_feet_inches(cm: i32) -> FeetInches {
    let total_inches = f64::from(cm) * INCHES_PER_CM;
    let per_foot = f64::from(INCHES_PER_FOOT);
    let feet = (total_inches / per_foot).floor();
    let inches = total_inches.rem_euclid(per_foot).floor();
    FeetInches::new(feet as i32, inches as i32)
}

/// Convert feet and inches back to the nearest whole centimeter.
pub fn from_feet_inches(height: FeetInches) -> i32 {
    let total_inches =
        f64::from(height.feet) * f64::from(INCHES_PER_FOOT) + f64::from(height.inches);
    (total_inches / INCHES_PER_CM).round() as i32
}
