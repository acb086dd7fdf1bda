//! Event handling for the height scale.
//!
//! The controller turns scroll samples and unit toggles into model updates and
//! then drives its collaborators in a fixed order:
//!
//! 1. update the [`ScaleModel`]
//! 2. pulse the [`FeedbackDevice`] (value transitions only)
//! 3. push fresh text to the [`RenderSurface`]
//! 4. notify the value-change listener (value transitions only)
//!
//! Each call runs to completion before returning; there is no deferred work.

use ruler_ui::{Callback, Pixels, SideEffect};

use crate::format::{format_primary, DisplayValue};
use crate::message::PickerMessage;
use crate::model::{ScaleModel, UnitMode, ValueChange};
use crate::tick_labels::TickLabels;

/// Something that can emit a single tactile pulse.
pub trait FeedbackDevice {
    fn pulse(&mut self);
}

impl FeedbackDevice for SideEffect {
    fn pulse(&mut self) {
        self.emit();
    }
}

/// Where the scale's text ends up.
pub trait RenderSurface {
    /// Replace the main readout.
    fn show_primary(&mut self, display: &DisplayValue);

    /// Labels of the major ticks, owned by the surface.
    fn tick_labels_mut(&mut self) -> &mut TickLabels;
}

/// Wires scroll and unit-toggle input to a [`ScaleModel`].
pub struct ScaleController<S, F> {
    model: ScaleModel,
    surface: S,
    feedback: F,
    on_value_change: Callback<i32>,
}

impl<S: RenderSurface, F: FeedbackDevice> ScaleController<S, F> {
    /// Take ownership of the model and render the initial readout and tick
    /// labels. No feedback fires during construction.
    pub fn new(model: ScaleModel, surface: S, feedback: F) -> Self {
        let mut controller = Self {
            model,
            surface,
            feedback,
            on_value_change: Callback::none(),
        };
        controller.push_primary();
        controller.push_ticks();
        controller
    }

    /// Set a listener called with the new value after each transition.
    pub fn on_value_change<G>(mut self, f: G) -> Self
    where
        G: Fn(i32) + 'static,
    {
        self.on_value_change = Callback::new(f);
        self
    }

    /// Handle a scroll position sample.
    ///
    /// Samples resolving to the current value (momentum settling, bounce past
    /// either end) do nothing at all.
    pub fn on_scroll(&mut self, offset: f32) -> ValueChange {
        let offset = Pixels::new(offset);
        let change = self.model.update_from_offset(offset);
        if !change.changed {
            log::trace!("Scroll to {} kept value {}", offset, change.value);
            return change;
        }

        log::debug!("Scroll to {} selected {} cm", offset, change.value);
        self.feedback.pulse();
        self.push_primary();
        self.on_value_change.call(change.value);
        change
    }

    /// Handle a unit toggle selection.
    ///
    /// The readout and every tick label are re-rendered even when `mode` was
    /// already active. Returns whether the mode changed.
    pub fn on_unit_toggle(&mut self, mode: UnitMode) -> bool {
        let changed = self.model.set_unit(mode);
        if changed {
            log::debug!("Unit mode switched to {}", mode.name());
        }
        self.push_primary();
        self.push_ticks();
        changed
    }

    /// Dispatch a message to the matching handler.
    pub fn update(&mut self, message: PickerMessage) {
        match message {
            PickerMessage::Scrolled(offset) => {
                self.on_scroll(offset);
            }
            PickerMessage::UnitToggled(mode) => {
                self.on_unit_toggle(mode);
            }
        }
    }

    /// Readout for the current state, computed fresh.
    pub fn display_value(&self) -> DisplayValue {
        format_primary(self.model.current_value(), self.model.unit_mode())
    }

    /// Scrollable length of the ticks, for sizing the content.
    pub fn content_extent_pixels(&self) -> Pixels {
        self.model.content_extent_pixels()
    }

    /// Offset the surface should scroll to in order to select `value`.
    pub fn offset_for_value(&self, value: i32) -> Pixels {
        self.model.offset_for_value(value)
    }

    pub fn model(&self) -> &ScaleModel {
        &self.model
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    fn push_primary(&mut self) {
        let display = self.display_value();
        self.surface.show_primary(&display);
    }

    fn push_ticks(&mut self) {
        let mode = self.model.unit_mode();
        self.surface.tick_labels_mut().refresh(mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Range;
    use ruler_ui::{PixelDensity, TickLayout};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    /// Records every call in a shared log so ordering can be asserted.
    struct RecordingSurface {
        log: Log,
        labels: TickLabels,
    }

    impl RenderSurface for RecordingSurface {
        fn show_primary(&mut self, display: &DisplayValue) {
            self.log.borrow_mut().push(format!("primary {}", display));
        }

        fn tick_labels_mut(&mut self) -> &mut TickLabels {
            self.log.borrow_mut().push("ticks".to_string());
            &mut self.labels
        }
    }

    struct RecordingFeedback {
        log: Log,
    }

    impl FeedbackDevice for RecordingFeedback {
        fn pulse(&mut self) {
            self.log.borrow_mut().push("pulse".to_string());
        }
    }

    fn controller(log: &Log) -> ScaleController<RecordingSurface, RecordingFeedback> {
        let range = Range::new(120, 220).unwrap();
        let model = ScaleModel::new(range, 10.0).unwrap();
        let layout =
            TickLayout::new(120, 220, PixelDensity::try_new(10.0).unwrap(), 10).unwrap();
        let surface = RecordingSurface {
            log: Rc::clone(log),
            labels: TickLabels::from_layout(&layout),
        };
        let feedback = RecordingFeedback {
            log: Rc::clone(log),
        };
        ScaleController::new(model, surface, feedback)
    }

    fn take(log: &Log) -> Vec<String> {
        log.borrow_mut().drain(..).collect()
    }

    #[test]
    fn test_construction_renders_without_feedback() {
        let log = Log::default();
        let c = controller(&log);
        assert_eq!(take(&log), vec!["primary 120 cm", "ticks"]);
        assert_eq!(
            c.surface().labels.get(120).map(|l| l.text.as_str()),
            Some("120 cm")
        );
    }

    #[test]
    fn test_transition_order_is_pulse_then_display_then_listener() {
        let log = Log::default();
        let listener_log = Rc::clone(&log);
        let mut c = controller(&log)
            .on_value_change(move |v| listener_log.borrow_mut().push(format!("changed {}", v)));
        take(&log);

        c.on_scroll(305.0);
        assert_eq!(take(&log), vec!["pulse", "primary 150 cm", "changed 150"]);
    }

    #[test]
    fn test_unchanged_scroll_does_nothing() {
        let log = Log::default();
        let mut c = controller(&log);
        take(&log);

        let change = c.on_scroll(0.0);
        assert!(!change.changed);
        c.on_scroll(-40.0);
        c.on_scroll(9.9);
        assert!(take(&log).is_empty());
    }

    #[test]
    fn test_one_pulse_per_transition() {
        let log = Log::default();
        let mut c = controller(&log);
        take(&log);

        for offset in [300.0, 301.0, 305.5, 309.0, 310.0, 310.0, 2000.0, 3000.0] {
            c.on_scroll(offset);
        }
        let pulses = take(&log).iter().filter(|e| *e == "pulse").count();
        assert_eq!(pulses, 3);
        assert_eq!(c.model().current_value(), 220);
    }

    #[test]
    fn test_toggle_refreshes_everything_without_pulse() {
        let log = Log::default();
        let mut c = controller(&log);
        c.on_scroll(1000.0);
        take(&log);

        assert!(c.on_unit_toggle(UnitMode::Imperial));
        assert_eq!(take(&log), vec!["primary 7'2\"", "ticks"]);
        assert_eq!(c.model().current_value(), 220);
        assert_eq!(
            c.surface().labels.get(220).map(|l| l.text.as_str()),
            Some("7'2\"")
        );
    }

    #[test]
    fn test_redundant_toggle_still_refreshes() {
        let log = Log::default();
        let mut c = controller(&log);
        take(&log);

        assert!(!c.on_unit_toggle(UnitMode::Metric));
        assert_eq!(take(&log), vec!["primary 120 cm", "ticks"]);
    }

    #[test]
    fn test_update_dispatches_messages() {
        let log = Log::default();
        let mut c = controller(&log);
        take(&log);

        c.update(PickerMessage::Scrolled(630.0));
        c.update(PickerMessage::UnitToggled(UnitMode::Imperial));
        assert_eq!(
            take(&log),
            vec!["pulse", "primary 183 cm", "primary 6'0\"", "ticks"]
        );
    }

    #[test]
    fn test_side_effect_as_feedback_device() {
        let pulses = Rc::new(std::cell::Cell::new(0));
        let counter = Rc::clone(&pulses);
        let log = Log::default();
        let range = Range::new(120, 220).unwrap();
        let surface = RecordingSurface {
            log: Rc::clone(&log),
            labels: TickLabels::default(),
        };
        let mut c = ScaleController::new(
            ScaleModel::new(range, 10.0).unwrap(),
            surface,
            SideEffect::new(move || counter.set(counter.get() + 1)),
        );

        c.on_scroll(100.0);
        c.on_scroll(105.0);
        c.on_scroll(200.0);
        assert_eq!(pulses.get(), 2);
    }
}
