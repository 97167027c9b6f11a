//! dB and frequency gridlines with labels, laid out once per geometry change.

use crate::geometry::ViewGeometry;
use crate::range::DisplayRange;
use crate::surface::{Rgba, Surface, TextAlign, TextBaseline, TextStyle};

pub const GRID_COLOR: Rgba = Rgba::new(200, 200, 200, 0.10);
pub const DB_STEP: f32 = 10.0;
pub const FREQ_DIVISIONS: u32 = 10;
const FONT: &str = "12px sans-serif";
/// dB gridlines start right of their labels.
const DB_GRID_START_X: f64 = 20.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub align: TextAlign,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// Precomputed overlay for one `(range, geometry, width, height)` combination.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxesOverlay {
    width: u32,
    height: u32,
    pub lines: Vec<GridLine>,
    pub db_labels: Vec<Label>,
    pub freq_labels: Vec<Label>,
}

impl AxesOverlay {
    pub fn build(range: &DisplayRange, geometry: &ViewGeometry, width: u32, height: u32) -> Self {
        let w = width as f64;
        let h = height as f64;
        let mut overlay = Self { width, height, ..Default::default() };

        // Lines at min + k * step strictly inside the range. Very wide ranges
        // thin out to at most one line per pixel row.
        let step = DB_STEP as f64;
        let span = range.max_db as f64 - range.min_db as f64;
        let count = ((span - 2.0 * step) / step).floor() + 1.0;
        if count >= 1.0 {
            let count = count as u64;
            let stride = count.div_ceil(height.max(1) as u64);
            for k in (0..count).step_by(stride as usize) {
                let db = (range.min_db as f64 + step * (k + 1) as f64) as f32;
                let y = h - range.squeeze(db, 0, height) as f64;
                overlay.db_labels.push(Label { text: format!("{db}"), x: 5.0, y, align: TextAlign::Left });
                overlay.lines.push(GridLine { x0: DB_GRID_START_X, y0: y, x1: w, y1: y });
            }
        }

        let step = (w / FREQ_DIVISIONS as f64).round();
        for i in 0..=FREQ_DIVISIONS {
            let x = step * i as f64;
            if geometry.has_span() {
                let (align, adjust) = match i {
                    0 => (TextAlign::Left, 3.0),
                    FREQ_DIVISIONS => (TextAlign::Right, -3.0),
                    _ => (TextAlign::Center, 0.0),
                };
                let freq = geometry.center_hz
                    + geometry.span_hz / FREQ_DIVISIONS as f64 * (i as f64 - FREQ_DIVISIONS as f64 / 2.0);
                overlay.freq_labels.push(Label {
                    text: frequency_label(freq, geometry),
                    x: x + adjust,
                    y: h - 3.0,
                    align,
                });
            }
            overlay.lines.push(GridLine { x0: x, y0: 0.0, x1: x, y1: h });
        }

        overlay
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        for line in &self.lines {
            surface.begin_path();
            surface.move_to(line.x0, line.y0);
            surface.line_to(line.x1, line.y1);
            surface.stroke(GRID_COLOR);
        }

        let mut style =
            TextStyle { font: FONT, color: Rgba::WHITE, align: TextAlign::Left, baseline: TextBaseline::Middle };
        for label in &self.db_labels {
            surface.fill_text(&label.text, label.x, label.y, &style);
        }
        style.baseline = TextBaseline::Bottom;
        for label in &self.freq_labels {
            style.align = label.align;
            surface.fill_text(&label.text, label.x, label.y, &style);
        }
    }
}

/// Scale to `M`/`k` by the top of the configured window (`center + span`),
/// printing the shortest decimal form.
pub fn frequency_label(freq_hz: f64, geometry: &ViewGeometry) -> String {
    let top = geometry.center_hz + geometry.span_hz;
    if top > 1e6 {
        format!("{}M", freq_hz / 1e6)
    } else if top > 1e3 {
        format!("{}k", freq_hz / 1e3)
    } else {
        format!("{freq_hz}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::RecordingSurface;

    fn build(width: u32, height: u32) -> AxesOverlay {
        AxesOverlay::build(
            &DisplayRange::default(),
            &ViewGeometry::new(150_000_000.0, 30_000_000.0),
            width,
            height,
        )
    }

    #[test]
    fn test_db_labels_every_ten_inside_range() {
        let axes = build(1000, 110);
        let texts: Vec<&str> = axes.db_labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["-110", "-100", "-90", "-80", "-70", "-60", "-50", "-40", "-30", "-20"]);
        // 110 px over 110 dB: one pixel per dB
        assert_eq!(axes.db_labels[0].y, 100.0);
        assert_eq!(axes.db_labels[9].y, 10.0);
    }

    #[test]
    fn test_freq_labels_and_alignment() {
        let axes = build(1000, 200);
        let texts: Vec<&str> = axes.freq_labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["135M", "138M", "141M", "144M", "147M", "150M", "153M", "156M", "159M", "162M", "165M"]
        );
        assert_eq!(axes.freq_labels[0].align, TextAlign::Left);
        assert_eq!(axes.freq_labels[0].x, 3.0);
        assert_eq!(axes.freq_labels[5].align, TextAlign::Center);
        assert_eq!(axes.freq_labels[5].x, 500.0);
        assert_eq!(axes.freq_labels[10].align, TextAlign::Right);
        assert_eq!(axes.freq_labels[10].x, 997.0);
        assert!(axes.freq_labels.iter().all(|l| l.y == 197.0));
    }

    #[test]
    fn test_narrow_range_has_no_db_lines() {
        let range = DisplayRange::new(-25.0, -10.0).unwrap();
        let axes = AxesOverlay::build(&range, &ViewGeometry::new(150e6, 30e6), 1000, 110);
        assert!(axes.db_labels.is_empty());
        let range = DisplayRange::new(-30.0, -10.0).unwrap();
        let axes = AxesOverlay::build(&range, &ViewGeometry::new(150e6, 30e6), 1000, 110);
        assert_eq!(axes.db_labels.len(), 1);
        assert_eq!(axes.db_labels[0].text, "-20");
    }

    #[test]
    fn test_huge_range_is_bounded_by_pane_height() {
        let range = DisplayRange::new(-1.0e9, -10.0).unwrap();
        let axes = AxesOverlay::build(&range, &ViewGeometry::new(150e6, 30e6), 1000, 110);
        assert!(!axes.db_labels.is_empty());
        assert!(axes.db_labels.len() <= 110, "{} labels", axes.db_labels.len());
        assert_eq!(axes.db_labels[0].text, format!("{}", (-1.0e9f64 + 10.0) as f32));
    }

    #[test]
    fn test_gridline_count() {
        let axes = build(1000, 110);
        assert_eq!(axes.lines.len(), 10 + 11);
    }

    #[test]
    fn test_zero_span_keeps_lines_drops_labels() {
        let axes = AxesOverlay::build(&DisplayRange::default(), &ViewGeometry::new(1e6, 0.0), 500, 100);
        assert!(axes.freq_labels.is_empty());
        assert_eq!(axes.lines.len(), 10 + 11);
    }

    #[test]
    fn test_frequency_label_units() {
        assert_eq!(frequency_label(136_500_000.0, &ViewGeometry::new(150e6, 30e6)), "136.5M");
        assert_eq!(frequency_label(12_000.0, &ViewGeometry::new(10_000.0, 4_000.0)), "12k");
        assert_eq!(frequency_label(450.0, &ViewGeometry::new(500.0, 100.0)), "450");
    }

    #[test]
    fn test_draw_emits_all_labels() {
        let axes = build(1000, 110);
        let mut surface = RecordingSurface::new(1000, 110);
        axes.draw(&mut surface);
        assert_eq!(surface.strokes(), axes.lines.len());
        assert_eq!(surface.texts().len(), 10 + 11);
    }
}
