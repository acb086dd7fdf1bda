//! Picker message types.
//!
//! Input events reach the scale as messages in the Elm architecture style and
//! are applied with `ScaleController::update`.

use crate::model::UnitMode;

/// Messages that can be sent to update the scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerMessage {
    /// The scale scrolled to this offset, in pixels
    Scrolled(f32),
    /// A segment of the unit toggle was selected
    UnitToggled(UnitMode),
}
