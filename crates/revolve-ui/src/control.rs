//! Control panel holding the user-registered scroll controls.

use std::ops::RangeInclusive;

use egui::{Slider, Ui};
use revolve_core::{Stride, StrideHandle};

/// An integer slider bound to a stride handle.
///
/// The slider writes through the handle, so the value is visible to the draw
/// phase of the next frame without any other plumbing.
#[derive(Debug, Clone)]
pub struct ScrollControl {
    label: String,
    handle: StrideHandle,
    range: RangeInclusive<u32>,
    step: u32,
    tooltip: Option<String>,
}

impl ScrollControl {
    /// Creates a control; `range` is narrowed to the valid stride range.
    pub fn new(
        label: impl Into<String>,
        handle: StrideHandle,
        range: RangeInclusive<u32>,
        step: u32,
        tooltip: Option<String>,
    ) -> Self {
        let limits = Stride::range();
        let low = (*range.start()).clamp(*limits.start(), *limits.end());
        let high = (*range.end()).clamp(low, *limits.end());
        Self {
            label: label.into(),
            handle,
            range: low..=high,
            step: step.max(1),
            tooltip,
        }
    }

    /// The label shown next to the slider.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The accepted value range.
    pub fn range(&self) -> RangeInclusive<u32> {
        self.range.clone()
    }

    /// The increment between slider positions.
    pub fn step(&self) -> u32 {
        self.step
    }

    /// The hover text, if any.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Current value of the bound stride.
    pub fn value(&self) -> u32 {
        self.handle.get().value()
    }

    /// Stores `value`, clamped to the control's range.
    ///
    /// Returns true if the bound stride changed.
    pub fn apply(&self, value: u32) -> bool {
        let value = value.clamp(*self.range.start(), *self.range.end());
        let changed = self.handle.set(value);
        if changed {
            log::debug!("{} set to {value}", self.label);
        }
        changed
    }

    /// Draws the slider. Returns true if the user changed the value.
    pub fn build_ui(&self, ui: &mut Ui) -> bool {
        let mut value = self.value();
        let response = ui.add(
            Slider::new(&mut value, self.range.clone())
                .step_by(f64::from(self.step))
                .text(self.label.as_str()),
        );
        let response = match &self.tooltip {
            Some(tooltip) => response.on_hover_text(tooltip.as_str()),
            None => response,
        };
        response.changed() && self.apply(value)
    }
}

/// The panel shown next to the viewport.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    title: String,
    controls: Vec<ScrollControl>,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new("revolve")
    }
}

impl ControlPanel {
    /// The heading shown above the controls.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Creates an empty panel.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            controls: Vec::new(),
        }
    }

    /// Adds an integer slider bound to `handle`.
    pub fn add_scroll_control(
        &mut self,
        label: impl Into<String>,
        handle: StrideHandle,
        range: RangeInclusive<u32>,
        step: u32,
        tooltip: impl Into<String>,
    ) {
        let tooltip: String = tooltip.into();
        let control = ScrollControl::new(
            label,
            handle,
            range,
            step,
            (!tooltip.is_empty()).then_some(tooltip),
        );
        log::debug!(
            "added control '{}' with range {:?}",
            control.label(),
            control.range()
        );
        self.controls.push(control);
    }

    /// The registered controls, in insertion order.
    pub fn controls(&self) -> &[ScrollControl] {
        &self.controls
    }

    /// Finds a control by label.
    pub fn control(&self, label: &str) -> Option<&ScrollControl> {
        self.controls.iter().find(|c| c.label() == label)
    }

    /// Removes every control.
    pub fn clear(&mut self) {
        self.controls.clear();
    }

    /// Number of registered controls.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// True if no control has been registered.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Draws every control into `ui`. Returns true if any value changed.
    pub fn build_ui(&self, ui: &mut Ui) -> bool {
        let mut changed = false;
        for control in &self.controls {
            changed |= control.build_ui(ui);
        }
        changed
    }
}
