//! Frequency marker: position, nearest-bin readout and drag handling.

use crate::geometry::ViewGeometry;
use crate::surface::{Rgba, Surface, TextAlign, TextBaseline, TextStyle};

/// Pointer-down within this many pixels of the marker line starts a drag.
pub const GRAB_TOLERANCE_PX: f64 = 10.0;

const LABEL_STYLE: TextStyle = TextStyle {
    font: "12px sans-serif",
    color: Rgba::WHITE,
    align: TextAlign::Left,
    baseline: TextBaseline::Alphabetic,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug, Default)]
pub struct MarkerTracker {
    frequency_hz: Option<f64>,
    drag: DragState,
}

impl MarkerTracker {
    pub fn new(frequency_hz: Option<f64>) -> Self {
        Self { frequency_hz, drag: DragState::Idle }
    }

    pub fn frequency_hz(&self) -> Option<f64> {
        self.frequency_hz
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Programmatic reposition; any drag in progress is abandoned.
    pub fn set_frequency(&mut self, frequency_hz: f64) {
        self.frequency_hz = Some(frequency_hz);
        self.drag = DragState::Idle;
    }

    pub fn clear(&mut self) {
        self.frequency_hz = None;
        self.drag = DragState::Idle;
    }

    /// Pixel position of the marker, if there is one and the span is usable.
    pub fn pixel(&self, geometry: &ViewGeometry, width: f64) -> Option<f64> {
        let freq = self.frequency_hz?;
        geometry
            .has_span()
            .then(|| geometry.frequency_to_pixel(freq, width))
    }

    /// Returns true when the press grabbed the marker.
    pub fn pointer_down(&mut self, x: f64, geometry: &ViewGeometry, width: f64) -> bool {
        match self.pixel(geometry, width) {
            Some(px) if (x - px).abs() < GRAB_TOLERANCE_PX => {
                self.drag = DragState::Dragging;
                true
            }
            _ => false,
        }
    }

    /// Returns true when the marker moved and the display needs a redraw.
    pub fn pointer_move(&mut self, x: f64, geometry: &ViewGeometry, width: f64) -> bool {
        if self.drag != DragState::Dragging || width <= 0.0 {
            return false;
        }
        self.frequency_hz = Some(geometry.pixel_to_frequency(x, width));
        true
    }

    /// Pointer released or left the surface.
    pub fn release(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Vertical line plus `"<MHz> MHz / <level> dBm"` label, drawn only
    /// while the marker sits inside `0..=width`.
    pub fn draw<S: Surface>(
        &self,
        surface: &mut S,
        geometry: &ViewGeometry,
        width: f64,
        pane_height: f64,
        bins: &[f32],
    ) {
        let (Some(freq), Some(x)) = (self.frequency_hz, self.pixel(geometry, width)) else {
            return;
        };
        if !(0.0..=width).contains(&x) {
            return;
        }

        surface.begin_path();
        surface.move_to(x, 0.0);
        surface.line_to(x, pane_height);
        surface.stroke(Rgba::WHITE);

        let level = geometry.nearest_bin_value(freq, bins);
        surface.fill_text(&marker_label(freq, level), x + 5.0, 15.0, &LABEL_STYLE);
    }
}

pub fn marker_label(freq_hz: f64, level: f32) -> String {
    format!("{:.2} MHz / {:.2} dBm", freq_hz / 1e6, level)
}
