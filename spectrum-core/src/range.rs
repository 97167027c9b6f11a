use serde::{Deserialize, Serialize};

/// Step used by the keyboard range adjustments, in dB.
pub const RANGE_STEP_DB: f32 = 5.0;

/// Narrowest window `decrease` will still shrink, in dB.
pub const MIN_RANGE_SPAN_DB: f32 = 10.0;

/// The decibel window mapped onto pixel heights and palette indices.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayRange {
    pub min_db: f32,
    pub max_db: f32,
}

impl Default for DisplayRange {
    fn default() -> Self {
        Self { min_db: -120.0, max_db: -10.0 }
    }
}

impl DisplayRange {
    pub fn new(min_db: f32, max_db: f32) -> Option<Self> {
        (min_db < max_db).then_some(Self { min_db, max_db })
    }

    pub fn span(&self) -> f32 {
        self.max_db - self.min_db
    }

    /// Clamp `value` into the range and rescale it onto `0..=out_max`.
    ///
    /// Values at or below `min_db` return `out_min`, at or above `max_db`
    /// return `out_max`. In between the result is scaled by `out_max` only,
    /// so callers always pass `out_min = 0`. Rounding is half-up, matching
    /// browser `Math.round`.
    pub fn squeeze(&self, value: f32, out_min: u32, out_max: u32) -> u32 {
        if value <= self.min_db {
            out_min
        } else if value >= self.max_db {
            out_max
        } else {
            let t = (value as f64 - self.min_db as f64) / (self.max_db as f64 - self.min_db as f64);
            (t * out_max as f64 + 0.5).floor() as u32
        }
    }

    /// Shift both edges down (the trace moves up on screen).
    pub fn shifted_up(&self) -> Self {
        Self { min_db: self.min_db - RANGE_STEP_DB, max_db: self.max_db - RANGE_STEP_DB }
    }

    pub fn shifted_down(&self) -> Self {
        Self { min_db: self.min_db + RANGE_STEP_DB, max_db: self.max_db + RANGE_STEP_DB }
    }

    pub fn widened(&self) -> Self {
        Self { min_db: self.min_db - RANGE_STEP_DB, max_db: self.max_db + RANGE_STEP_DB }
    }

    /// `None` when the window is already at or below [`MIN_RANGE_SPAN_DB`].
    pub fn narrowed(&self) -> Option<Self> {
        (self.span() > MIN_RANGE_SPAN_DB).then(|| Self {
            min_db: self.min_db + RANGE_STEP_DB,
            max_db: self.max_db - RANGE_STEP_DB,
        })
    }
}
