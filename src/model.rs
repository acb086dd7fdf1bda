//! Scale state: the selectable range, the selected height and the unit mode.

use ruler_ui::{PixelDensity, Pixels};
use serde::{Deserialize, Serialize};

use crate::error::PickerError;

/// Inclusive range of selectable heights in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    minimum: i32,
    maximum: i32,
}

impl Range {
    /// Create a range, rejecting `minimum >= maximum`.
    pub fn new(minimum: i32, maximum: i32) -> Result<Self, PickerError> {
        if minimum >= maximum {
            return Err(PickerError::InvalidRange { minimum, maximum });
        }
        Ok(Self { minimum, maximum })
    }

    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Number of centimeter steps between the bounds.
    pub fn span(&self) -> i32 {
        self.maximum - self.minimum
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.minimum..=self.maximum).contains(&value)
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.minimum, self.maximum)
    }
}

/// Which unit the readouts are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitMode {
    /// Centimeters
    #[default]
    Metric,
    /// Feet and inches
    Imperial,
}

impl UnitMode {
    /// Segment index of this mode on the unit toggle.
    pub fn index(&self) -> usize {
        match self {
            UnitMode::Metric => 0,
            UnitMode::Imperial => 1,
        }
    }

    /// Get the display name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            UnitMode::Metric => "metric",
            UnitMode::Imperial => "imperial",
        }
    }
}

impl TryFrom<usize> for UnitMode {
    type Error = PickerError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(UnitMode::Metric),
            1 => Ok(UnitMode::Imperial),
            other => Err(PickerError::InvalidUnitIndex(other)),
        }
    }
}

impl std::str::FromStr for UnitMode {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "cm" | "0" => Ok(UnitMode::Metric),
            "imperial" | "ft" | "1" => Ok(UnitMode::Imperial),
            other => Err(PickerError::UnknownUnit(other.to_string())),
        }
    }
}

/// Outcome of feeding a scroll offset to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueChange {
    /// Whether the selected value moved
    pub changed: bool,
    /// Selected value after the update
    pub value: i32,
}

/// Owns the selected height and maps scroll offsets onto it.
///
/// `current_value` only moves through [`ScaleModel::update_from_offset`] and
/// always stays inside the range.
#[derive(Debug, Clone)]
pub struct ScaleModel {
    range: Range,
    density: PixelDensity,
    current_value: i32,
    unit_mode: UnitMode,
}

impl ScaleModel {
    /// Create a model positioned at the range minimum, in metric mode.
    pub fn new(range: Range, pixel_density: f32) -> Result<Self, PickerError> {
        let density = PixelDensity::try_new(pixel_density)?;
        Ok(Self {
            range,
            density,
            current_value: range.minimum(),
            unit_mode: UnitMode::Metric,
        })
    }

    /// Start in the given unit mode instead of metric.
    pub fn with_unit(mut self, mode: UnitMode) -> Self {
        self.unit_mode = mode;
        self
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn pixel_density(&self) -> PixelDensity {
        self.density
    }

    pub fn current_value(&self) -> i32 {
        self.current_value
    }

    pub fn unit_mode(&self) -> UnitMode {
        self.unit_mode
    }

    /// Map a scroll offset to a value and store it if it differs.
    ///
    /// Negative and NaN offsets select the minimum; anything past the content
    /// extent (including infinity) saturates at the maximum.
    pub fn update_from_offset(&mut self, offset: Pixels) -> ValueChange {
        let steps = self
            .density
            .whole_steps(offset.non_negative())
            .min(self.range.span() as f32);
        let value = self.range.clamp(self.range.minimum() + steps as i32);
        debug_assert!(self.range.contains(value));

        if value == self.current_value {
            return ValueChange {
                changed: false,
                value,
            };
        }

        self.current_value = value;
        ValueChange {
            changed: true,
            value,
        }
    }

    /// Switch unit mode. Returns whether the mode actually changed.
    pub fn set_unit(&mut self, mode: UnitMode) -> bool {
        let changed = self.unit_mode != mode;
        self.unit_mode = mode;
        changed
    }

    /// Pixel length covered by the ticks, excluding any viewport padding.
    pub fn content_extent_pixels(&self) -> Pixels {
        self.density.extent(self.range.span())
    }

    /// Scroll offset at which `value` is selected. Values outside the range
    /// are clamped first.
    pub fn offset_for_value(&self, value: i32) -> Pixels {
        self.density
            .extent(self.range.clamp(value) - self.range.minimum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ScaleModel {
        ScaleModel::new(Range::new(120, 220).unwrap(), 10.0).unwrap()
    }

    #[test]
    fn test_range_rejects_inverted_or_equal_bounds() {
        assert_eq!(
            Range::new(220, 120),
            Err(PickerError::InvalidRange {
                minimum: 220,
                maximum: 120
            })
        );
        assert!(Range::new(150, 150).is_err());
        assert!(Range::new(149, 150).is_ok());
    }

    #[test]
    fn test_model_rejects_bad_density() {
        let range = Range::new(120, 220).unwrap();
        assert_eq!(
            ScaleModel::new(range, 0.0).unwrap_err(),
            PickerError::InvalidPixelDensity(0.0)
        );
        assert!(ScaleModel::new(range, -1.0).is_err());
        assert!(ScaleModel::new(range, f32::NAN).is_err());
    }

    #[test]
    fn test_initial_state() {
        let m = model();
        assert_eq!(m.current_value(), 120);
        assert_eq!(m.unit_mode(), UnitMode::Metric);
    }

    #[test]
    fn test_offset_floors_to_whole_centimeters() {
        let mut m = model();
        assert_eq!(
            m.update_from_offset(Pixels::new(305.0)),
            ValueChange {
                changed: true,
                value: 150
            }
        );
        assert_eq!(m.current_value(), 150);
    }

    #[test]
    fn test_offsets_at_or_below_zero_select_minimum() {
        for offset in [0.0, -0.1, -500.0, f32::NEG_INFINITY, f32::NAN] {
            let mut m = model();
            m.update_from_offset(Pixels::new(640.0));
            let change = m.update_from_offset(Pixels::new(offset));
            assert_eq!(change.value, 120, "offset {}", offset);
            assert_eq!(m.current_value(), 120);
        }
    }

    #[test]
    fn test_offsets_past_extent_select_maximum() {
        let extent = model().content_extent_pixels().value();
        for offset in [extent, extent + 0.5, 3050.0, 1.0e9, f32::INFINITY] {
            let mut m = model();
            let change = m.update_from_offset(Pixels::new(offset));
            assert_eq!(change.value, 220, "offset {}", offset);
            assert!(change.changed);
        }
    }

    #[test]
    fn test_same_value_reports_unchanged_without_mutation() {
        let mut m = model();
        assert!(m.update_from_offset(Pixels::new(300.0)).changed);
        assert!(!m.update_from_offset(Pixels::new(301.0)).changed);
        assert!(!m.update_from_offset(Pixels::new(309.9)).changed);
        assert!(m.update_from_offset(Pixels::new(310.0)).changed);
        assert_eq!(m.current_value(), 151);
    }

    #[test]
    fn test_overshoot_at_bound_is_not_a_change() {
        let mut m = model();
        assert!(m.update_from_offset(Pixels::new(1000.0)).changed);
        assert!(!m.update_from_offset(Pixels::new(1200.0)).changed);
        assert!(!m.update_from_offset(Pixels::new(99_999.0)).changed);
    }

    #[test]
    fn test_set_unit_is_idempotent_and_keeps_value() {
        let mut m = model();
        m.update_from_offset(Pixels::new(630.0));
        assert!(!m.set_unit(UnitMode::Metric));
        assert!(m.set_unit(UnitMode::Imperial));
        assert!(!m.set_unit(UnitMode::Imperial));
        assert_eq!(m.unit_mode(), UnitMode::Imperial);
        assert_eq!(m.current_value(), 183);
    }

    #[test]
    fn test_content_extent() {
        assert_eq!(model().content_extent_pixels(), Pixels::new(1000.0));
        let narrow = ScaleModel::new(Range::new(150, 160).unwrap(), 2.5).unwrap();
        assert_eq!(narrow.content_extent_pixels(), Pixels::new(25.0));
    }

    #[test]
    fn test_offset_for_value_maps_back() {
        let mut m = model();
        assert_eq!(m.offset_for_value(175), Pixels::new(550.0));
        assert_eq!(m.offset_for_value(50), Pixels::ZERO);
        assert_eq!(m.offset_for_value(300), Pixels::new(1000.0));
        assert_eq!(m.current_value(), 120);

        let offset = m.offset_for_value(175);
        assert_eq!(m.update_from_offset(offset).value, 175);
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = Range::new(120, 220).unwrap();
        assert!(range.contains(120));
        assert!(range.contains(220));
        assert!(!range.contains(119));
        assert!(!range.contains(221));
        assert_eq!(range.clamp(300), 220);
    }

    #[test]
    fn test_offset_for_value_roundtrips_at_inexact_densities() {
        let range = Range::new(120, 220).unwrap();
        for density in [0.3, 0.7, 1.1, 2.9, 3.3, 6.1, 7.3] {
            let mut m = ScaleModel::new(range, density).unwrap();
            for cm in 121..=220 {
                let offset = m.offset_for_value(cm);
                let change = m.update_from_offset(offset);
                assert_eq!(change.value, cm, "density {} offset {}", density, offset);
                assert!(range.contains(m.current_value()));
            }
        }
    }

    #[test]
    fn test_exact_tick_offset_at_point_seven() {
        // 13 * 0.7 px sits exactly on the 133 cm tick
        let mut m = ScaleModel::new(Range::new(120, 220).unwrap(), 0.7).unwrap();
        assert_eq!(m.update_from_offset(Pixels::new(13.0 * 0.7)).value, 133);
        assert_eq!(m.update_from_offset(Pixels::new(13.0 * 0.7 - 0.05)).value, 132);
    }

    #[test]
    fn test_unit_mode_from_index() {
        assert_eq!(UnitMode::try_from(0), Ok(UnitMode::Metric));
        assert_eq!(UnitMode::try_from(1), Ok(UnitMode::Imperial));
        assert_eq!(
            UnitMode::try_from(2),
            Err(PickerError::InvalidUnitIndex(2))
        );
        assert_eq!(UnitMode::Imperial.index(), 1);
    }

    #[test]
    fn test_unit_mode_from_str() {
        assert_eq!("Imperial".parse::<UnitMode>(), Ok(UnitMode::Imperial));
        assert_eq!(" cm ".parse::<UnitMode>(), Ok(UnitMode::Metric));
        assert!("furlong".parse::<UnitMode>().is_err());
    }
}
