//! Waterfall history: a fixed number of RGBA rows, newest at row 0.
//!
//! Rows live in a ring so pushing a row never moves pixel data; the logical
//! "scroll everything down one row" happens by moving the head. Readers only
//! ever see logical rows, so the shift/overwrite/discard-oldest step is
//! atomic from the caller's side.

use crate::palette::Palette;
use crate::range::DisplayRange;

/// Fill used for freshly (re)allocated history.
pub const BASE_COLOR: [u8; 4] = [0, 0, 0, 255];

pub struct HistoryBuffer {
    width: usize,
    rows: usize,
    /// Physical index of logical row 0.
    head: usize,
    /// Rows pushed since the last reset, capped at `rows`.
    filled: usize,
    pixels: Vec<u8>,
}

impl HistoryBuffer {
    pub fn new(rows: usize, width: usize) -> Self {
        let rows = rows.max(1);
        Self {
            width,
            rows,
            head: 0,
            filled: 0,
            pixels: base_fill(rows, width),
        }
    }

    /// Bin count each row holds.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total row capacity.
    pub fn capacity(&self) -> usize {
        self.rows
    }

    /// Rows written since the last reset.
    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Reallocate at `width` columns and clear to [`BASE_COLOR`].
    pub fn reset(&mut self, width: usize) {
        log::debug!("waterfall reallocated: {} -> {} bins, {} rows", self.width, width, self.rows);
        self.width = width;
        self.head = 0;
        self.filled = 0;
        self.pixels = base_fill(self.rows, width);
    }

    /// Scroll history down one row and color `bins` into row 0.
    ///
    /// A bin count that differs from the current width reallocates first.
    pub fn push_row(&mut self, bins: &[f32], range: &DisplayRange, palette: &Palette) {
        if bins.len() != self.width {
            self.reset(bins.len());
        }
        self.head = (self.head + self.rows - 1) % self.rows;
        self.filled = (self.filled + 1).min(self.rows);

        let stride = self.width * 4;
        let start = self.head * stride;
        let row = &mut self.pixels[start..start + stride];
        for (px, &value) in row.chunks_exact_mut(4).zip(bins) {
            let [r, g, b] = palette.color(range.squeeze(value, 0, 255) as u8);
            px.copy_from_slice(&[r, g, b, 255]);
        }
    }

    /// RGBA bytes of logical row `index` (0 = newest), `None` past capacity.
    pub fn row(&self, index: usize) -> Option<&[u8]> {
        if index >= self.rows {
            return None;
        }
        let stride = self.width * 4;
        let physical = (self.head + index) % self.rows;
        Some(&self.pixels[physical * stride..(physical + 1) * stride])
    }

    /// Copy the newest `count` rows, top to bottom, into `out` as one
    /// contiguous image. Returns the number of rows written.
    pub fn copy_newest(&self, count: usize, out: &mut Vec<u8>) -> usize {
        let count = count.min(self.rows);
        let stride = self.width * 4;
        out.clear();
        out.reserve(count * stride);

        // At most two contiguous runs: head..end and 0..wrap.
        let first = count.min(self.rows - self.head);
        out.extend_from_slice(&self.pixels[self.head * stride..(self.head + first) * stride]);
        out.extend_from_slice(&self.pixels[..(count - first) * stride]);
        count
    }
}

fn base_fill(rows: usize, width: usize) -> Vec<u8> {
    BASE_COLOR.repeat(rows * width)
}
