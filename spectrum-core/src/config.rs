use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::range::DisplayRange;

/// Deepest waterfall history accepted at construction.
pub const MAX_HISTORY_ROWS: usize = 16_384;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("display range is empty: min_db {min_db} must be below max_db {max_db}")]
    InvalidRange { min_db: f32, max_db: f32 },
    #[error("spectrum percent {0} is outside 0..=100")]
    InvalidSpectrumPercent(u32),
    #[error("spectrum percent step {0} is outside 0..=100")]
    InvalidSpectrumPercentStep(u32),
    #[error("waterfall needs at least one history row")]
    ZeroHistoryRows,
    #[error("waterfall history of {0} rows exceeds the {MAX_HISTORY_ROWS} row limit")]
    TooManyHistoryRows(usize),
    #[error("palette has {0} entries, expected 256")]
    PaletteLength(usize),
    #[error("at least one palette is required")]
    NoPalettes,
}

/// Construction options, keyed the way the page script passes them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpectrumOptions {
    pub center_hz: f64,
    pub span_hz: f64,
    /// Initial bin count; 0 means "take it from the first vector".
    #[serde(rename = "wf_size")]
    pub wf_size: usize,
    /// Waterfall history depth in rows.
    #[serde(rename = "wf_rows")]
    pub wf_rows: usize,
    pub spectrum_percent: u32,
    pub spectrum_percent_step: u32,
    pub averaging: u32,
    pub max_hold: bool,
    pub min_db: f32,
    pub max_db: f32,
    pub marker_hz: Option<f64>,
}

impl Default for SpectrumOptions {
    fn default() -> Self {
        let range = DisplayRange::default();
        Self {
            center_hz: 150_000_000.0,
            span_hz: 30_000_000.0,
            wf_size: 0,
            wf_rows: 4096,
            spectrum_percent: 70,
            spectrum_percent_step: 5,
            averaging: 0,
            max_hold: false,
            min_db: range.min_db,
            max_db: range.max_db,
            marker_hz: Some(160_000_000.0),
        }
    }
}

impl SpectrumOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_db >= self.max_db {
            return Err(ConfigError::InvalidRange { min_db: self.min_db, max_db: self.max_db });
        }
        if self.spectrum_percent > 100 {
            return Err(ConfigError::InvalidSpectrumPercent(self.spectrum_percent));
        }
        if self.spectrum_percent_step > 100 {
            return Err(ConfigError::InvalidSpectrumPercentStep(self.spectrum_percent_step));
        }
        if self.wf_rows == 0 {
            return Err(ConfigError::ZeroHistoryRows);
        }
        if self.wf_rows > MAX_HISTORY_ROWS {
            return Err(ConfigError::TooManyHistoryRows(self.wf_rows));
        }
        Ok(())
    }

    pub fn range(&self) -> Result<DisplayRange, ConfigError> {
        DisplayRange::new(self.min_db, self.max_db)
            .ok_or(ConfigError::InvalidRange { min_db: self.min_db, max_db: self.max_db })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let opts = SpectrumOptions::default();
        assert!(opts.validate().is_ok());
        assert_eq!(opts.spectrum_percent, 70);
        assert_eq!(opts.wf_rows, 4096);
        assert_eq!(opts.marker_hz, Some(160_000_000.0));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let opts: SpectrumOptions =
            serde_json::from_str(r#"{"centerHz": 100000000, "wf_rows": 256, "maxHold": true}"#)
                .unwrap();
        assert_eq!(opts.center_hz, 100_000_000.0);
        assert_eq!(opts.wf_rows, 256);
        assert!(opts.max_hold);
        assert_eq!(opts.span_hz, 30_000_000.0);
        assert_eq!(opts.spectrum_percent_step, 5);
    }

    #[test]
    fn test_null_marker_disables_it() {
        let opts: SpectrumOptions = serde_json::from_str(r#"{"markerHz": null}"#).unwrap();
        assert_eq!(opts.marker_hz, None);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let opts = SpectrumOptions { min_db: -10.0, max_db: -20.0, ..Default::default() };
        assert_eq!(
            opts.validate(),
            Err(ConfigError::InvalidRange { min_db: -10.0, max_db: -20.0 })
        );

        let opts = SpectrumOptions { spectrum_percent: 101, ..Default::default() };
        assert_eq!(opts.validate(), Err(ConfigError::InvalidSpectrumPercent(101)));

        let opts = SpectrumOptions { wf_rows: 0, ..Default::default() };
        assert_eq!(opts.validate(), Err(ConfigError::ZeroHistoryRows));
    }

    #[test]
    fn test_validate_bounds_step_and_history_depth() {
        let opts: SpectrumOptions = serde_json::from_str(r#"{"spectrumPercentStep": 4294967295}"#).unwrap();
        assert_eq!(opts.validate(), Err(ConfigError::InvalidSpectrumPercentStep(u32::MAX)));

        let opts = SpectrumOptions { spectrum_percent_step: 100, ..Default::default() };
        assert!(opts.validate().is_ok());

        let opts = SpectrumOptions { wf_rows: MAX_HISTORY_ROWS, ..Default::default() };
        assert!(opts.validate().is_ok());
        let opts = SpectrumOptions { wf_rows: usize::MAX, ..Default::default() };
        assert_eq!(opts.validate(), Err(ConfigError::TooManyHistoryRows(usize::MAX)));
    }
}
