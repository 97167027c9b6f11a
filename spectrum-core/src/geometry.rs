use serde::{Deserialize, Serialize};

/// The visible frequency window: `center_hz ± span_hz / 2` across the
/// display width.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewGeometry {
    pub center_hz: f64,
    pub span_hz: f64,
}

impl ViewGeometry {
    pub fn new(center_hz: f64, span_hz: f64) -> Self {
        Self { center_hz, span_hz }
    }

    /// Frequency labels and the marker need a nonzero span.
    pub fn has_span(&self) -> bool {
        self.span_hz > 0.0
    }

    /// Lowest visible frequency.
    pub fn start_hz(&self) -> f64 {
        self.center_hz - self.span_hz / 2.0
    }

    pub fn frequency_to_pixel(&self, freq_hz: f64, display_width: f64) -> f64 {
        (freq_hz - self.start_hz()) / self.span_hz * display_width
    }

    pub fn pixel_to_frequency(&self, x: f64, display_width: f64) -> f64 {
        (x / display_width) * self.span_hz + self.start_hz()
    }

    /// Index of the bin nearest `freq_hz` in a vector of `bin_count` bins,
    /// `None` outside the vector.
    pub fn nearest_bin(&self, freq_hz: f64, bin_count: usize) -> Option<usize> {
        let index = ((freq_hz - self.start_hz()) / self.span_hz * bin_count as f64 + 0.5).floor();
        (index >= 0.0 && index < bin_count as f64).then_some(index as usize)
    }

    /// Value of the bin nearest `freq_hz`, or 0.0 when it falls outside.
    pub fn nearest_bin_value(&self, freq_hz: f64, bins: &[f32]) -> f32 {
        self.nearest_bin(freq_hz, bins.len())
            .map(|i| bins[i])
            .unwrap_or(0.0)
    }
}
