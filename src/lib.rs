//! height_picker - a scroll-driven height selection scale
//!
//! Maps the scroll offset of a vertical ruler onto a whole-centimeter height,
//! pulses a feedback device on every value transition, and keeps the readout
//! and tick labels in sync with a metric/imperial unit toggle. Drawing, layout
//! and the haptic engine stay with the caller behind [`RenderSurface`] and
//! [`FeedbackDevice`].

pub mod config;
pub mod constants;
mod controller;
pub mod convert;
mod error;
pub mod format;
mod message;
mod model;
mod surface;
mod tick_labels;

pub use config::{ConfigError, LogLevel, PickerConfig};
pub use controller::{FeedbackDevice, RenderSurface, ScaleController};
pub use convert::{from_feet_inches, to_feet_inches, FeetInches};
pub use error::PickerError;
pub use format::{format_primary, format_tick, DisplayValue};
pub use message::PickerMessage;
pub use model::{Range, ScaleModel, UnitMode, ValueChange};
pub use surface::TextSurface;
pub use tick_labels::{TickLabel, TickLabels};

// Re-export the scale toolkit types that users need
pub use ruler_ui::{Callback, Pixels, ScrollState, SideEffect, TickLayout};
