//! Rendering core for a live spectrum + waterfall display.
//!
//! Bin vectors (one dB value per frequency bin) arrive pre-computed. Each one
//! is smoothed by the [`filter::TemporalFilter`], mapped to pixels and palette
//! indices by [`range::DisplayRange::squeeze`], drawn as a filled trace and
//! pushed as a new row into the [`history::HistoryBuffer`]. A draggable
//! frequency marker is tracked by [`marker::MarkerTracker`].
//!
//! Nothing here touches a graphics API directly: every draw call goes through
//! the [`surface::Surface`] trait so hosts can back it with a browser canvas,
//! an image buffer, or a test recorder.

pub mod axes;
pub mod config;
pub mod filter;
pub mod geometry;
pub mod history;
pub mod keymap;
pub mod marker;
pub mod palette;
pub mod range;
pub mod spectrum;
pub mod surface;

pub use config::{ConfigError, SpectrumOptions};
pub use keymap::{action_for_key, Action};
pub use spectrum::{Outcome, Spectrum};
pub use surface::Surface;
