//! The drawing-surface collaborator.
//!
//! The renderer only needs a handful of raster primitives: rectangle fills,
//! a single current path that can be stroked or gradient-filled, text, and a
//! non-smoothing blit of an RGBA image into a destination rectangle.

/// Straight-alpha RGBA color. Alpha is 0.0..=1.0 to match CSS `rgba()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string, e.g. `rgba(200,200,200,0.1)`.
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
    Alphabetic,
}

impl TextBaseline {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
            TextBaseline::Bottom => "bottom",
            TextBaseline::Alphabetic => "alphabetic",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font: &'static str,
    pub color: Rgba,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Axis-aligned rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Vertical linear gradient from `y0` (offset 0.0) to `y1` (offset 1.0).
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub y0: f64,
    pub y1: f64,
    /// `(offset, color)` pairs with offsets ascending in 0.0..1.0.
    pub stops: Vec<(f32, Rgba)>,
}

/// Borrowed row-major RGBA8 pixels, `width * height * 4` bytes.
#[derive(Clone, Copy, Debug)]
pub struct ImageView<'a> {
    pub width: u32,
    pub height: u32,
    pub pixels: &'a [u8],
}

pub trait Surface {
    /// Current pixel size of the surface as `(width, height)`.
    fn size(&self) -> (u32, u32);

    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Start a new current path, discarding the previous one.
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self, color: Rgba);
    fn fill_gradient(&mut self, gradient: &Gradient);

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);

    /// Copy `image` into `dst`, scaling without smoothing.
    fn blit(&mut self, image: ImageView<'_>, dst: Rect);
}
