//! Browser host for the spectrum + waterfall display.
//!
//! Page script calls [`mount_spectrum`] once per display and then pushes bin
//! vectors through [`SpectrumHandle::add_data`] as they arrive.

pub mod canvas;
pub mod components;
pub mod viewer;

use leptos::prelude::*;
use spectrum_core::{Spectrum, SpectrumOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::spectrum_canvas::SpectrumCanvas;
use crate::viewer::{with_viewer, ViewerId};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log_level());
}

/// Verbose in debug builds, quieter in release.
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Mount a display into the element with id `element_id`.
///
/// `options_json` is a JSON object of display options; missing keys take
/// their defaults.
#[wasm_bindgen]
pub fn mount_spectrum(element_id: &str, options_json: Option<String>) -> Result<SpectrumHandle, JsError> {
    let options: SpectrumOptions = match options_json.as_deref() {
        Some(json) => serde_json::from_str(json)?,
        None => SpectrumOptions::default(),
    };
    let spectrum = Spectrum::new(&options)?;

    let parent = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| JsError::new(&format!("no element with id '{element_id}'")))?;

    let id = viewer::register(spectrum);
    leptos::mount::mount_to(parent, move || view! { <SpectrumCanvas viewer=id /> }).forget();
    log::info!("spectrum mounted on #{element_id}");

    Ok(SpectrumHandle { id })
}

/// Script-side handle to one mounted display.
#[wasm_bindgen]
pub struct SpectrumHandle {
    id: ViewerId,
}

#[wasm_bindgen]
impl SpectrumHandle {
    /// Render one frame of dB values, one per frequency bin.
    pub fn add_data(&self, bins: &[f32]) {
        with_viewer(self.id, |v| v.add_data(bins));
    }

    pub fn redraw(&self) {
        with_viewer(self.id, |v| v.redraw());
    }

    /// Returns false when the key is not bound.
    pub fn on_key(&self, key: &str) -> bool {
        with_viewer(self.id, |v| v.handle_key(key)).unwrap_or(false)
    }

    /// Returns false (and leaves the range alone) unless `min_db < max_db`.
    pub fn set_range(&self, min_db: f32, max_db: f32) -> bool {
        self.update(|s| s.set_range(min_db, max_db)).unwrap_or(false)
    }

    pub fn set_center_hz(&self, hz: f64) {
        self.update(|s| s.set_center_hz(hz));
    }

    pub fn set_span_hz(&self, hz: f64) {
        self.update(|s| s.set_span_hz(hz));
    }

    pub fn set_averaging(&self, window: u32) {
        self.update(|s| s.set_averaging(window));
    }

    pub fn increment_averaging(&self) {
        self.update(|s| s.increment_averaging());
    }

    pub fn decrement_averaging(&self) {
        self.update(|s| s.decrement_averaging());
    }

    pub fn set_paused(&self, paused: bool) {
        self.update(|s| s.set_paused(paused));
    }

    pub fn toggle_paused(&self) {
        self.update(|s| s.toggle_paused());
    }

    pub fn set_max_hold(&self, enabled: bool) {
        self.update(|s| s.set_max_hold(enabled));
    }

    pub fn toggle_max_hold(&self) {
        self.update(|s| s.toggle_max_hold());
    }

    /// Returns false unless `percent` is within 0..=100.
    pub fn set_spectrum_percent(&self, percent: u32) -> bool {
        self.update(|s| s.set_spectrum_percent(percent)).unwrap_or(false)
    }

    pub fn increment_spectrum_percent(&self) -> bool {
        self.update(|s| s.increment_spectrum_percent()).unwrap_or(false)
    }

    pub fn decrement_spectrum_percent(&self) -> bool {
        self.update(|s| s.decrement_spectrum_percent()).unwrap_or(false)
    }

    pub fn cycle_palette(&self) {
        self.update(|s| s.cycle_palette());
    }

    pub fn set_marker_frequency(&self, hz: f64) {
        self.update(|s| s.set_marker_frequency(hz));
    }

    pub fn clear_marker(&self) {
        self.update(|s| s.clear_marker());
    }
}

impl SpectrumHandle {
    /// Apply a setter, then repaint from the retained frame.
    fn update<R>(&self, f: impl FnOnce(&mut Spectrum) -> R) -> Option<R> {
        with_viewer(self.id, |v| {
            let result = f(v.spectrum_mut());
            v.redraw();
            result
        })
    }
}
