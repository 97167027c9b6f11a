//! The frame renderer: owns every piece of display state and turns each
//! incoming bin vector into one painted frame.

use crate::axes::AxesOverlay;
use crate::config::{ConfigError, SpectrumOptions};
use crate::filter::TemporalFilter;
use crate::geometry::ViewGeometry;
use crate::history::HistoryBuffer;
use crate::keymap::Action;
use crate::marker::MarkerTracker;
use crate::palette::{self, Palette, PaletteSet};
use crate::range::DisplayRange;
use crate::surface::{Gradient, ImageView, Rect, Rgba, Surface};

pub const TRACE_COLOR: Rgba = Rgba::opaque(0xfe, 0xfe, 0xfe);

/// What the host should do after [`Spectrum::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing visible changed, or the request was refused.
    Unchanged,
    /// Repaint via [`Spectrum::redraw`] to show the change without new data.
    Redraw,
    /// Enter (`true`) or leave fullscreen; the host owns the DOM request.
    Fullscreen(bool),
}

#[derive(Debug)]
struct Layout {
    width: u32,
    height: u32,
    spectrum_percent: u32,
    percent_step: u32,
    spectrum_height: u32,
}

/// Vectors the last frame was drawn from, kept for data-less redraws.
#[derive(Debug, Default)]
struct Frame {
    primary: Vec<f32>,
    max_hold: Option<Vec<f32>>,
}

pub struct Spectrum {
    range: DisplayRange,
    geometry: ViewGeometry,
    filter: TemporalFilter,
    history: HistoryBuffer,
    marker: MarkerTracker,
    palettes: PaletteSet,
    layout: Layout,
    gradient: Gradient,
    axes: AxesOverlay,
    axes_dirty: bool,
    paused: bool,
    fullscreen: bool,
    frame: Option<Frame>,
    /// Reused contiguous copy of the visible waterfall rows.
    scratch: Vec<u8>,
}

impl Spectrum {
    pub fn new(options: &SpectrumOptions) -> Result<Self, ConfigError> {
        Self::with_palettes(options, palette::builtin())
    }

    pub fn with_palettes(options: &SpectrumOptions, palettes: Vec<Palette>) -> Result<Self, ConfigError> {
        options.validate()?;
        let range = options.range()?;
        let palettes = PaletteSet::new(palettes)?;
        let gradient = palettes.active().gradient(0.0);

        Ok(Self {
            range,
            geometry: ViewGeometry::new(options.center_hz, options.span_hz),
            filter: TemporalFilter::new(options.averaging, options.max_hold),
            history: HistoryBuffer::new(options.wf_rows, options.wf_size),
            marker: MarkerTracker::new(options.marker_hz),
            palettes,
            layout: Layout {
                width: 0,
                height: 0,
                spectrum_percent: options.spectrum_percent,
                percent_step: options.spectrum_percent_step,
                spectrum_height: 0,
            },
            gradient,
            axes: AxesOverlay::default(),
            axes_dirty: true,
            paused: false,
            fullscreen: false,
            frame: None,
            scratch: Vec::new(),
        })
    }

    // ── Frame pipeline ─────────────────────────────────────────────────────

    /// Render one incoming bin vector. Dropped entirely while paused.
    pub fn add_data<S: Surface>(&mut self, surface: &mut S, bins: &[f32]) {
        if self.paused {
            return;
        }

        if bins.len() != self.history.width() {
            self.history.reset(bins.len());
        }

        let frame = self.frame.get_or_insert_with(Frame::default);
        frame.primary.clear();
        frame.primary.extend_from_slice(self.filter.process(bins));
        match self.filter.max_hold() {
            Some(held) => {
                let stored = frame.max_hold.get_or_insert_with(Vec::new);
                stored.clear();
                stored.extend_from_slice(held);
            }
            None => frame.max_hold = None,
        }

        self.draw_spectrum(surface);
        self.history.push_row(bins, &self.range, self.palettes.active());
        self.composite_waterfall(surface);

        let (width, height) = surface.size();
        self.resize(width, height);
    }

    /// Repaint from the retained frame without touching filter or history.
    pub fn redraw<S: Surface>(&mut self, surface: &mut S) {
        self.draw_spectrum(surface);
        self.composite_waterfall(surface);
    }

    fn draw_spectrum<S: Surface>(&mut self, surface: &mut S) {
        let width = self.layout.width as f64;
        let pane = self.layout.spectrum_height;
        surface.fill_rect(Rect::new(0.0, 0.0, width, self.layout.height as f64), Rgba::BLACK);

        if pane < 1 {
            return;
        }

        if self.axes_dirty || self.axes.size() != (self.layout.width, pane) {
            self.axes = AxesOverlay::build(&self.range, &self.geometry, self.layout.width, pane);
            self.axes_dirty = false;
        }

        if let Some(frame) = &self.frame {
            if let Some(held) = &frame.max_hold {
                trace_path(surface, &self.range, held, width, pane);
                surface.stroke(TRACE_COLOR);
            }
            trace_path(surface, &self.range, &frame.primary, width, pane);
            surface.stroke(TRACE_COLOR);
            surface.fill_gradient(&self.gradient);
        }

        self.axes.draw(surface);

        if let Some(frame) = &self.frame {
            self.marker.draw(surface, &self.geometry, width, pane as f64, &frame.primary);
        }
    }

    /// Blit as many of the newest history rows as fit below the spectrum
    /// pane, one source row per output row.
    fn composite_waterfall<S: Surface>(&mut self, surface: &mut S) {
        let top = self.layout.spectrum_height;
        let available = self.layout.height.saturating_sub(top) as usize;
        let rows = self.history.capacity().min(available);
        if rows == 0 || self.history.width() == 0 {
            return;
        }

        let copied = self.history.copy_newest(rows, &mut self.scratch);
        let image = ImageView {
            width: self.history.width() as u32,
            height: copied as u32,
            pixels: &self.scratch,
        };
        let dst = Rect::new(0.0, top as f64, self.layout.width as f64, copied as f64);
        surface.blit(image, dst);
    }

    // ── Layout ─────────────────────────────────────────────────────────────

    /// Adopt a new surface size. Returns true when the size changed and the
    /// pane split was recomputed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if (width, height) == (self.layout.width, self.layout.height) {
            return false;
        }
        log::debug!("surface resized to {width}x{height}");
        self.layout.width = width;
        self.layout.height = height;
        self.update_spectrum_ratio();
        true
    }

    fn update_spectrum_ratio(&mut self) {
        let height = self.layout.height as f64 * self.layout.spectrum_percent as f64 / 100.0;
        self.layout.spectrum_height = (height + 0.5).floor() as u32;
        self.gradient = self.palettes.active().gradient(self.layout.spectrum_height as f64);
        self.axes_dirty = true;
    }

    pub fn spectrum_height(&self) -> u32 {
        self.layout.spectrum_height
    }

    pub fn spectrum_percent(&self) -> u32 {
        self.layout.spectrum_percent
    }

    /// Accepted only within 0..=100.
    pub fn set_spectrum_percent(&mut self, percent: u32) -> bool {
        if percent > 100 {
            return false;
        }
        self.layout.spectrum_percent = percent;
        self.update_spectrum_ratio();
        true
    }

    pub fn increment_spectrum_percent(&mut self) -> bool {
        match self.layout.spectrum_percent.checked_add(self.layout.percent_step) {
            Some(next) => self.set_spectrum_percent(next),
            None => false,
        }
    }

    pub fn decrement_spectrum_percent(&mut self) -> bool {
        match self.layout.spectrum_percent.checked_sub(self.layout.percent_step) {
            Some(next) => self.set_spectrum_percent(next),
            None => false,
        }
    }

    // ── Range and geometry ─────────────────────────────────────────────────

    pub fn range(&self) -> DisplayRange {
        self.range
    }

    /// Refused (returns false) unless `min_db < max_db`.
    pub fn set_range(&mut self, min_db: f32, max_db: f32) -> bool {
        match DisplayRange::new(min_db, max_db) {
            Some(range) => {
                self.apply_range(range);
                true
            }
            None => false,
        }
    }

    fn apply_range(&mut self, range: DisplayRange) {
        log::debug!("display range {} .. {} dB", range.min_db, range.max_db);
        self.range = range;
        self.axes_dirty = true;
    }

    pub fn range_up(&mut self) {
        self.apply_range(self.range.shifted_up());
    }

    pub fn range_down(&mut self) {
        self.apply_range(self.range.shifted_down());
    }

    pub fn range_increase(&mut self) {
        self.apply_range(self.range.widened());
    }

    /// No-op once the window is down to the minimum span.
    pub fn range_decrease(&mut self) -> bool {
        match self.range.narrowed() {
            Some(range) => {
                self.apply_range(range);
                true
            }
            None => false,
        }
    }

    pub fn geometry(&self) -> ViewGeometry {
        self.geometry
    }

    pub fn set_center_hz(&mut self, hz: f64) {
        self.geometry.center_hz = hz;
        self.axes_dirty = true;
    }

    pub fn set_span_hz(&mut self, hz: f64) {
        self.geometry.span_hz = hz;
        self.axes_dirty = true;
    }

    // ── Filtering ──────────────────────────────────────────────────────────

    pub fn filter(&self) -> &TemporalFilter {
        &self.filter
    }

    pub fn set_averaging(&mut self, window: u32) {
        self.filter.set_window(window);
    }

    pub fn increment_averaging(&mut self) {
        self.filter.increment_window();
    }

    pub fn decrement_averaging(&mut self) {
        self.filter.decrement_window();
    }

    pub fn set_max_hold(&mut self, enabled: bool) {
        self.filter.set_max_hold(enabled);
        if let Some(frame) = self.frame.as_mut() {
            frame.max_hold = None;
        }
    }

    pub fn toggle_max_hold(&mut self) {
        self.set_max_hold(!self.filter.max_hold_enabled());
    }

    // ── Pause, palette, fullscreen ─────────────────────────────────────────

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    pub fn palette(&self) -> &Palette {
        self.palettes.active()
    }

    /// Switch to the next palette; only colors change, never geometry.
    pub fn cycle_palette(&mut self) {
        self.palettes.cycle();
        self.gradient = self.palettes.active().gradient(self.layout.spectrum_height as f64);
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Flip the fullscreen flag and return the new value.
    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    /// Record a fullscreen change the host observed (e.g. Escape pressed).
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    // ── History ────────────────────────────────────────────────────────────

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Primary trace of the last rendered frame.
    pub fn last_frame(&self) -> Option<&[f32]> {
        self.frame.as_ref().map(|f| f.primary.as_slice())
    }

    // ── Marker ─────────────────────────────────────────────────────────────

    pub fn marker(&self) -> &MarkerTracker {
        &self.marker
    }

    pub fn set_marker_frequency(&mut self, hz: f64) {
        self.marker.set_frequency(hz);
    }

    pub fn clear_marker(&mut self) {
        self.marker.clear();
    }

    /// Returns true when the press grabbed the marker.
    pub fn pointer_down(&mut self, x: f64) -> bool {
        self.marker.pointer_down(x, &self.geometry, self.layout.width as f64)
    }

    /// Returns true when a dragged marker moved and a redraw is due.
    pub fn pointer_move(&mut self, x: f64) -> bool {
        self.marker.pointer_move(x, &self.geometry, self.layout.width as f64)
    }

    pub fn pointer_up(&mut self) {
        self.marker.release();
    }

    pub fn pointer_leave(&mut self) {
        self.marker.release();
    }

    // ── Keyboard ───────────────────────────────────────────────────────────

    pub fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::TogglePause => {
                self.toggle_paused();
                Outcome::Unchanged
            }
            Action::ToggleFullscreen => Outcome::Fullscreen(self.toggle_fullscreen()),
            Action::CyclePalette => {
                self.cycle_palette();
                Outcome::Redraw
            }
            Action::RangeUp => {
                self.range_up();
                Outcome::Redraw
            }
            Action::RangeDown => {
                self.range_down();
                Outcome::Redraw
            }
            Action::RangeIncrease => {
                self.range_increase();
                Outcome::Redraw
            }
            Action::RangeDecrease => redraw_if(self.range_decrease()),
            Action::IncrementSpectrumPercent => redraw_if(self.increment_spectrum_percent()),
            Action::DecrementSpectrumPercent => redraw_if(self.decrement_spectrum_percent()),
            Action::IncrementAveraging => {
                self.increment_averaging();
                Outcome::Unchanged
            }
            Action::DecrementAveraging => {
                self.decrement_averaging();
                Outcome::Unchanged
            }
            Action::ToggleMaxHold => {
                self.toggle_max_hold();
                Outcome::Redraw
            }
        }
    }
}

fn redraw_if(changed: bool) -> Outcome {
    if changed {
        Outcome::Redraw
    } else {
        Outcome::Unchanged
    }
}

/// Closed outline of `bins` across `width`, ready to stroke and fill.
///
/// Points sit at bin positions scaled to the surface, one bin of overhang on
/// each side. Values at the bottom of the range are pushed just below the
/// pane so they do not draw a line along the baseline.
fn trace_path<S: Surface>(surface: &mut S, range: &DisplayRange, bins: &[f32], width: f64, pane: u32) {
    let pane_f = pane as f64;
    let scale = if bins.is_empty() { 1.0 } else { width / bins.len() as f64 };
    let baseline = pane_f + 1.0;

    surface.begin_path();
    surface.move_to(-scale, baseline);
    let mut y = baseline;
    for (i, &value) in bins.iter().enumerate() {
        y = pane_f - range.squeeze(value, 0, pane) as f64;
        if y > pane_f - 1.0 {
            y = baseline;
        }
        if i == 0 {
            surface.line_to(-scale, y);
        }
        surface.line_to(i as f64 * scale, y);
    }
    surface.line_to(width + scale, y);
    surface.line_to(width + scale, baseline);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::BASE_COLOR;
    use crate::surface::recording::{Op, RecordingSurface};

    fn options() -> SpectrumOptions {
        SpectrumOptions { wf_rows: 16, ..Default::default() }
    }

    fn spectrum(width: u32, height: u32) -> (Spectrum, RecordingSurface) {
        let mut s = Spectrum::new(&options()).unwrap();
        s.resize(width, height);
        (s, RecordingSurface::new(width, height))
    }

    fn gradient_fills(surface: &RecordingSurface) -> usize {
        surface.ops.iter().filter(|op| matches!(op, Op::FillGradient(_))).count()
    }

    #[test]
    fn test_resize_applies_split() {
        let (s, _) = spectrum(300, 200);
        assert_eq!(s.spectrum_height(), 140);
    }

    #[test]
    fn test_resize_reports_only_real_changes() {
        let (mut s, _) = spectrum(300, 200);
        assert!(!s.resize(300, 200));
        assert!(s.resize(300, 100));
        assert_eq!(s.spectrum_height(), 70);
    }

    #[test]
    fn test_frame_draws_trace_fill_and_waterfall() {
        let (mut s, mut surface) = spectrum(300, 200);
        s.add_data(&mut surface, &[-60.0; 300]);

        assert_eq!(surface.ops[0], Op::FillRect(Rect::new(0.0, 0.0, 300.0, 200.0), Rgba::BLACK));
        assert_eq!(gradient_fills(&surface), 1);
        let blits = surface.blits();
        assert_eq!(blits.len(), 1);
        match blits[0] {
            Op::Blit { width, height, dst, .. } => {
                assert_eq!(*width, 300);
                // 16 history rows fit in the 60 px pane; no vertical stretch.
                assert_eq!(*height, 16);
                assert_eq!(*dst, Rect::new(0.0, 140.0, 300.0, 16.0));
            }
            _ => unreachable!(),
        }
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn test_waterfall_rows_clipped_to_pane() {
        let opts = SpectrumOptions { wf_rows: 4096, ..Default::default() };
        let mut s = Spectrum::new(&opts).unwrap();
        s.resize(100, 200);
        let mut surface = RecordingSurface::new(100, 200);
        s.add_data(&mut surface, &[-60.0; 64]);
        match surface.blits()[0] {
            Op::Blit { height, dst, .. } => {
                assert_eq!(*height, 60);
                assert_eq!(dst.height, 60.0);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_paused_frames_are_dropped() {
        let (mut s, mut surface) = spectrum(300, 200);
        s.set_averaging(4);
        s.add_data(&mut surface, &[-60.0; 8]);
        let averaged = s.filter().averaged().unwrap().to_vec();

        s.set_paused(true);
        surface.ops.clear();
        s.add_data(&mut surface, &[-10.0; 8]);
        assert!(surface.ops.is_empty());
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.filter().averaged().unwrap(), averaged.as_slice());

        s.toggle_paused();
        s.add_data(&mut surface, &[-10.0; 8]);
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn test_bin_count_change_reallocates_history() {
        let (mut s, mut surface) = spectrum(300, 200);
        s.add_data(&mut surface, &[-20.0; 512]);
        s.add_data(&mut surface, &[-20.0; 512]);
        assert_eq!(s.history().len(), 2);

        s.add_data(&mut surface, &[-120.0; 1024]);
        let history = s.history();
        assert_eq!(history.width(), 1024);
        assert_eq!(history.len(), 1);
        for i in 1..history.capacity() {
            assert_eq!(history.row(i).unwrap(), BASE_COLOR.repeat(1024).as_slice(), "row {i}");
        }
    }

    #[test]
    fn test_trace_path_points() {
        let (mut s, mut surface) = spectrum(400, 200);
        s.set_range(-140.0, 0.0);
        s.clear_marker();
        s.add_data(&mut surface, &[-70.0, -70.0, -140.0, -70.0]);
        // pane 140, -70 is half way -> y 70; -140 hides below the pane
        let path: Vec<&Op> = surface
            .ops
            .iter()
            .skip_while(|op| **op != Op::BeginPath)
            .take(8)
            .collect();
        assert_eq!(
            path,
            vec![
                &Op::BeginPath,
                &Op::MoveTo(-100.0, 141.0),
                &Op::LineTo(-100.0, 70.0),
                &Op::LineTo(0.0, 70.0),
                &Op::LineTo(100.0, 70.0),
                &Op::LineTo(200.0, 141.0),
                &Op::LineTo(300.0, 70.0),
                &Op::LineTo(500.0, 70.0),
            ]
        );
    }

    #[test]
    fn test_max_hold_adds_a_trace() {
        let (mut s, mut surface) = spectrum(300, 200);
        s.clear_marker();
        s.add_data(&mut surface, &[-60.0; 16]);
        let plain = surface.strokes();

        s.set_max_hold(true);
        surface.ops.clear();
        s.add_data(&mut surface, &[-60.0; 16]);
        assert_eq!(surface.strokes(), plain + 1);
        assert_eq!(gradient_fills(&surface), 1);
    }

    #[test]
    fn test_zero_height_pane_skips_spectrum_but_keeps_history() {
        let opts = SpectrumOptions { spectrum_percent: 0, ..options() };
        let mut s = Spectrum::new(&opts).unwrap();
        s.resize(300, 200);
        let mut surface = RecordingSurface::new(300, 200);
        s.add_data(&mut surface, &[-60.0; 16]);
        assert_eq!(gradient_fills(&surface), 0);
        assert!(surface.texts().is_empty());
        assert_eq!(s.history().len(), 1);
        match surface.blits()[0] {
            Op::Blit { dst, .. } => assert_eq!(dst.y, 0.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_first_frame_resizes_from_surface() {
        let mut s = Spectrum::new(&options()).unwrap();
        let mut surface = RecordingSurface::new(500, 400);
        s.add_data(&mut surface, &[-60.0; 16]);
        assert_eq!(s.spectrum_height(), 280);
    }

    #[test]
    fn test_redraw_leaves_filter_and_history_alone() {
        let (mut s, mut surface) = spectrum(300, 200);
        s.set_averaging(5);
        s.add_data(&mut surface, &[-100.0; 4]);
        s.add_data(&mut surface, &[-40.0; 4]);
        let averaged = s.filter().averaged().unwrap().to_vec();

        surface.ops.clear();
        s.set_marker_frequency(150_000_000.0);
        s.redraw(&mut surface);
        assert_eq!(s.filter().averaged().unwrap(), averaged.as_slice());
        assert_eq!(s.history().len(), 2);
        assert_eq!(surface.blits().len(), 1);
        assert!(surface.texts().iter().any(|t| t.starts_with("150.00 MHz")));
    }

    #[test]
    fn test_marker_drag_through_renderer() {
        let (mut s, mut surface) = spectrum(300, 200);
        s.add_data(&mut surface, &[-60.0; 16]);
        // default marker at 160 MHz -> pixel 250
        assert!(!s.pointer_down(100.0));
        assert!(s.pointer_down(252.0));
        assert!(s.pointer_move(150.0));
        assert_eq!(s.marker().frequency_hz(), Some(150_000_000.0));
        s.pointer_leave();
        assert!(!s.pointer_move(0.0));
    }

    #[test]
    fn test_spectrum_percent_bounds() {
        let (mut s, _) = spectrum(300, 200);
        assert!(!s.set_spectrum_percent(101));
        assert!(s.set_spectrum_percent(100));
        assert!(!s.increment_spectrum_percent());
        assert_eq!(s.spectrum_percent(), 100);

        assert!(s.set_spectrum_percent(3));
        assert!(!s.decrement_spectrum_percent());
        assert_eq!(s.spectrum_percent(), 3);
        assert!(s.increment_spectrum_percent());
        assert_eq!(s.spectrum_percent(), 8);
        assert_eq!(s.spectrum_height(), 16);
    }

    #[test]
    fn test_oversized_percent_step_is_refused() {
        let opts = SpectrumOptions { spectrum_percent_step: u32::MAX, ..options() };
        assert!(matches!(Spectrum::new(&opts), Err(ConfigError::InvalidSpectrumPercentStep(u32::MAX))));

        let opts = SpectrumOptions { spectrum_percent_step: 100, ..options() };
        let mut s = Spectrum::new(&opts).unwrap();
        s.resize(300, 200);
        assert!(!s.increment_spectrum_percent());
        assert_eq!(s.spectrum_percent(), 70);
        assert!(!s.decrement_spectrum_percent());
    }

    #[test]
    fn test_very_wide_range_still_renders() {
        let (mut s, mut surface) = spectrum(300, 200);
        assert!(s.set_range(-1.0e9, -10.0));
        s.add_data(&mut surface, &[-60.0; 8]);
        s.redraw(&mut surface);
        assert_eq!(s.history().len(), 1);
        assert!(surface.texts().len() <= 2 * (140 + 11 + 1));
    }

    #[test]
    fn test_range_keys() {
        let (mut s, _) = spectrum(300, 200);
        assert_eq!(s.apply(Action::RangeUp), Outcome::Redraw);
        assert_eq!(s.range(), DisplayRange { min_db: -125.0, max_db: -15.0 });
        s.set_range(-30.0, -20.0);
        assert_eq!(s.apply(Action::RangeDecrease), Outcome::Unchanged);
        assert_eq!(s.range(), DisplayRange { min_db: -30.0, max_db: -20.0 });
        assert!(!s.set_range(-20.0, -30.0));
    }

    #[test]
    fn test_fullscreen_is_reported_to_host() {
        let (mut s, _) = spectrum(300, 200);
        assert_eq!(s.apply(Action::ToggleFullscreen), Outcome::Fullscreen(true));
        assert_eq!(s.apply(Action::ToggleFullscreen), Outcome::Fullscreen(false));
    }

    #[test]
    fn test_averaging_keys() {
        let (mut s, _) = spectrum(300, 200);
        s.apply(Action::DecrementAveraging);
        assert_eq!(s.filter().window(), 0);
        s.apply(Action::IncrementAveraging);
        s.apply(Action::IncrementAveraging);
        assert_eq!(s.filter().window(), 2);
    }

    #[test]
    fn test_cycle_palette_keeps_geometry() {
        let (mut s, _) = spectrum(300, 200);
        let before = s.palette().name().to_string();
        s.apply(Action::CyclePalette);
        assert_ne!(s.palette().name(), before);
        assert_eq!(s.spectrum_height(), 140);
    }

    #[test]
    fn test_custom_palettes_validated() {
        let result = Spectrum::with_palettes(&options(), Vec::new());
        assert!(matches!(result, Err(ConfigError::NoPalettes)));
    }
}
