//! Readout formatting for heights.
//!
//! A metric readout comes in two runs, the magnitude and the `cm` suffix, so a
//! renderer can draw them at different weights. Imperial readouts are a single
//! run such as `5'9"`.

use std::fmt;

use crate::constants::METRIC_SUFFIX;
use crate::convert::to_feet_inches;
use crate::model::UnitMode;

/// A formatted height, split into the runs a renderer draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayValue {
    /// Large bold part
    pub magnitude: String,
    /// Smaller regular part, absent for feet/inches
    pub suffix: Option<&'static str>,
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suffix {
            Some(suffix) => write!(f, "{} {}", self.magnitude, suffix),
            None => f.write_str(&self.magnitude),
        }
    }
}

/// Format the main readout for the selected height.
pub fn format_primary(value: i32, mode: UnitMode) -> DisplayValue {
    match mode {
        UnitMode::Metric => DisplayValue {
            magnitude: value.to_string(),
            suffix: Some(METRIC_SUFFIX),
        },
        UnitMode::Imperial => {
            let height = to_feet_inches(value);
            DisplayValue {
                magnitude: format!("{}'{}\"", height.feet, height.inches),
                suffix: None,
            }
        }
    }
}

/// Format the label of a major tick at its fixed centimeter value.
pub fn format_tick(value: i32, mode: UnitMode) -> String {
    format_primary(value, mode).to_string()
}
