//! 256-entry color palettes and the fill gradient derived from them.

use crate::config::ConfigError;
use crate::surface::{Gradient, Rgba};

pub const PALETTE_LEN: usize = 256;

/// An ordered lookup table of exactly 256 RGB triples.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    name: String,
    colors: Box<[[u8; 3]; PALETTE_LEN]>,
}

impl Palette {
    pub fn new(name: impl Into<String>, colors: Vec<[u8; 3]>) -> Result<Self, ConfigError> {
        let len = colors.len();
        let colors: Box<[[u8; 3]; PALETTE_LEN]> = colors
            .into_boxed_slice()
            .try_into()
            .map_err(|_| ConfigError::PaletteLength(len))?;
        Ok(Self { name: name.into(), colors })
    }

    /// Build a palette by sampling `f` at `t = i / 255` for every index.
    pub fn from_fn(name: impl Into<String>, f: impl Fn(f32) -> [u8; 3]) -> Self {
        let mut colors = Box::new([[0u8; 3]; PALETTE_LEN]);
        for (i, c) in colors.iter_mut().enumerate() {
            *c = f(i as f32 / (PALETTE_LEN - 1) as f32);
        }
        Self { name: name.into(), colors }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn color(&self, index: u8) -> [u8; 3] {
        self.colors[index as usize]
    }

    /// Vertical fill gradient spanning `0..height`: the top takes the last
    /// palette entry, the bottom the first.
    pub fn gradient(&self, height: f64) -> Gradient {
        let stops = (0..PALETTE_LEN)
            .map(|i| {
                let [r, g, b] = self.colors[PALETTE_LEN - 1 - i];
                (i as f32 / PALETTE_LEN as f32, Rgba::opaque(r, g, b))
            })
            .collect();
        Gradient { y0: 0.0, y1: height, stops }
    }
}

fn channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Piecewise-linear ramp through `points`, `t` in 0..=1.
fn ramp(points: &[[f32; 3]], t: f32) -> [u8; 3] {
    let segments = (points.len() - 1) as f32;
    let pos = t.clamp(0.0, 1.0) * segments;
    let i = (pos.floor() as usize).min(points.len() - 2);
    let frac = pos - i as f32;
    let (a, b) = (points[i], points[i + 1]);
    [
        channel(a[0] + (b[0] - a[0]) * frac),
        channel(a[1] + (b[1] - a[1]) * frac),
        channel(a[2] + (b[2] - a[2]) * frac),
    ]
}

/// Blue through cyan, green and yellow to red.
pub fn spectrum() -> Palette {
    const POINTS: [[f32; 3]; 6] = [
        [0.0, 0.0, 0.2],
        [0.0, 0.2, 1.0],
        [0.0, 1.0, 1.0],
        [0.2, 1.0, 0.0],
        [1.0, 1.0, 0.0],
        [1.0, 0.0, 0.0],
    ];
    Palette::from_fn("spectrum", |t| ramp(&POINTS, t))
}

/// Polynomial approximation of viridis.
pub fn viridis() -> Palette {
    Palette::from_fn("viridis", |t| {
        let r = 0.267 + 0.003 * t + 0.993 * t * t - 0.263 * t * t * t;
        let g = 0.004 + 0.874 * t - 0.523 * t * t + 0.645 * t * t * t;
        let b = 0.329 + 0.899 * t - 2.179 * t * t + 1.952 * t * t * t;
        [channel(r), channel(g), channel(b)]
    })
}

/// Black through red and yellow to white.
pub fn heat() -> Palette {
    const POINTS: [[f32; 3]; 4] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0]];
    Palette::from_fn("heat", |t| ramp(&POINTS, t))
}

pub fn greyscale() -> Palette {
    Palette::from_fn("greyscale", |t| {
        let v = channel(t);
        [v, v, v]
    })
}

pub fn builtin() -> Vec<Palette> {
    vec![spectrum(), viridis(), heat(), greyscale()]
}

/// Non-empty list of palettes with one active entry.
#[derive(Clone, Debug)]
pub struct PaletteSet {
    palettes: Vec<Palette>,
    active: usize,
}

impl PaletteSet {
    pub fn new(palettes: Vec<Palette>) -> Result<Self, ConfigError> {
        if palettes.is_empty() {
            return Err(ConfigError::NoPalettes);
        }
        Ok(Self { palettes, active: 0 })
    }

    pub fn active(&self) -> &Palette {
        &self.palettes[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Advance to the next palette, wrapping after the last one.
    pub fn cycle(&mut self) -> &Palette {
        self.active = (self.active + 1) % self.palettes.len();
        log::debug!("palette switched to {}", self.palettes[self.active].name());
        &self.palettes[self.active]
    }
}

impl Default for PaletteSet {
    fn default() -> Self {
        Self { palettes: builtin(), active: 0 }
    }
}
