//! Frame-to-frame smoothing: exponential averaging and decaying max-hold.

/// Per-frame multiplier applied to held maxima that were not exceeded.
/// For dB values below zero this pushes the held trace down.
pub const MAX_HOLD_DECAY: f32 = 1.0025;

/// Rolling averaging and max-hold state across successive bin vectors.
///
/// Both stored vectors are reseeded from the incoming data whenever their
/// length disagrees with it, so a bin-count change is a reset, never an error.
#[derive(Debug, Default)]
pub struct TemporalFilter {
    window: u32,
    alpha: f32,
    averaged: Option<Vec<f32>>,
    max_hold: Option<Vec<f32>>,
    max_hold_enabled: bool,
}

impl TemporalFilter {
    pub fn new(window: u32, max_hold_enabled: bool) -> Self {
        let mut filter = Self { max_hold_enabled, ..Default::default() };
        filter.set_window(window);
        filter
    }

    pub fn window(&self) -> u32 {
        self.window
    }

    /// Smoothing factor, `2 / (window + 1)`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn set_window(&mut self, window: u32) {
        self.window = window;
        self.alpha = 2.0 / (window as f32 + 1.0);
    }

    pub fn increment_window(&mut self) {
        self.set_window(self.window.saturating_add(1));
    }

    /// No-op once averaging is already off.
    pub fn decrement_window(&mut self) {
        if self.window > 0 {
            self.set_window(self.window - 1);
        }
    }

    pub fn max_hold_enabled(&self) -> bool {
        self.max_hold_enabled
    }

    /// Toggling in either direction drops the held maxima.
    pub fn set_max_hold(&mut self, enabled: bool) {
        self.max_hold_enabled = enabled;
        self.max_hold = None;
    }

    pub fn averaged(&self) -> Option<&[f32]> {
        self.averaged.as_deref()
    }

    pub fn max_hold(&self) -> Option<&[f32]> {
        if self.max_hold_enabled {
            self.max_hold.as_deref()
        } else {
            None
        }
    }

    /// Feed one frame and return the vector to render as the primary trace.
    ///
    /// With averaging off the input is returned untouched. The max-hold
    /// trace, when enabled, is updated from the returned vector and read back
    /// through [`TemporalFilter::max_hold`].
    pub fn process<'a>(&'a mut self, bins: &'a [f32]) -> &'a [f32] {
        let primary: &[f32] = if self.window > 0 {
            let alpha = self.alpha;
            match self.averaged.as_mut() {
                Some(avg) if avg.len() == bins.len() => {
                    for (a, &b) in avg.iter_mut().zip(bins) {
                        *a += alpha * (b - *a);
                    }
                }
                _ => {
                    log::debug!("averaging reseeded at {} bins", bins.len());
                    self.averaged = Some(bins.to_vec());
                }
            }
            self.averaged.as_deref().unwrap_or(bins)
        } else {
            bins
        };

        if self.max_hold_enabled {
            match self.max_hold.as_mut() {
                Some(held) if held.len() == primary.len() => {
                    for (h, &v) in held.iter_mut().zip(primary) {
                        if v > *h {
                            *h = v;
                        } else {
                            *h *= MAX_HOLD_DECAY;
                        }
                    }
                }
                _ => self.max_hold = Some(primary.to_vec()),
            }
        }

        primary
    }
}
