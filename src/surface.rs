//! Headless render surface that keeps text instead of drawing it.

use crate::controller::RenderSurface;
use crate::format::DisplayValue;
use crate::tick_labels::TickLabels;

/// A render surface holding the current readout, every readout pushed so far,
/// and the tick label records.
#[derive(Debug, Clone, Default)]
pub struct TextSurface {
    primary: Option<DisplayValue>,
    history: Vec<String>,
    labels: TickLabels,
}

impl TextSurface {
    pub fn new(labels: TickLabels) -> Self {
        Self {
            primary: None,
            history: Vec::new(),
            labels,
        }
    }

    /// Current readout as plain text, empty before the first push.
    pub fn primary_text(&self) -> String {
        self.primary
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    pub fn primary(&self) -> Option<&DisplayValue> {
        self.primary.as_ref()
    }

    /// Every readout pushed, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn tick_labels(&self) -> &TickLabels {
        &self.labels
    }
}

impl RenderSurface for TextSurface {
    fn show_primary(&mut self, display: &DisplayValue) {
        self.history.push(display.to_string());
        self.primary = Some(display.clone());
    }

    fn tick_labels_mut(&mut self) -> &mut TickLabels {
        &mut self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_primary;
    use crate::model::UnitMode;

    #[test]
    fn test_records_pushes_in_order() {
        let mut surface = TextSurface::default();
        assert_eq!(surface.primary_text(), "");

        surface.show_primary(&format_primary(150, UnitMode::Metric));
        surface.show_primary(&format_primary(150, UnitMode::Imperial));

        assert_eq!(surface.primary_text(), "4'11\"");
        assert_eq!(surface.history(), ["150 cm", "4'11\""]);
        assert_eq!(surface.primary().and_then(|d| d.suffix), None);
    }
}
