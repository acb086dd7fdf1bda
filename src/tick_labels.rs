//! Label records for the major ticks of a scale.
//!
//! The render surface owns these. Each record remembers the fixed centimeter
//! value of its tick and the unit mode its text was last rendered in, so a
//! unit toggle can re-render every label from the value alone.

use ruler_ui::TickLayout;

use crate::format::format_tick;
use crate::model::UnitMode;

/// One labeled tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickLabel {
    /// Centimeter value of the tick, fixed at construction
    pub value: i32,
    /// Text currently shown
    pub text: String,
    /// Mode `text` was rendered in, `None` before the first render
    pub rendered_mode: Option<UnitMode>,
}

/// Ordered labels, one per major tick.
#[derive(Debug, Clone, Default)]
pub struct TickLabels {
    labels: Vec<TickLabel>,
}

impl TickLabels {
    /// Create unrendered labels for every major tick of `layout`.
    pub fn from_layout(layout: &TickLayout) -> Self {
        let labels = layout
            .majors()
            .map(|mark| TickLabel {
                value: mark.value,
                text: String::new(),
                rendered_mode: None,
            })
            .collect();
        Self { labels }
    }

    /// Re-render every label in `mode`.
    pub fn refresh(&mut self, mode: UnitMode) {
        for label in &mut self.labels {
            label.text = format_tick(label.value, mode);
            label.rendered_mode = Some(mode);
        }
    }

    /// Label for the tick at `value`, if that tick is labeled.
    pub fn get(&self, value: i32) -> Option<&TickLabel> {
        self.labels
            .binary_search_by_key(&value, |l| l.value)
            .ok()
            .map(|i| &self.labels[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &TickLabel> + '_ {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
