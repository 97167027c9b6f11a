use std::cell::RefCell;

use spectrum_core::{action_for_key, Outcome, Spectrum, Surface};
use web_sys::HtmlCanvasElement;

use crate::canvas::canvas_surface::CanvasSurface;

thread_local! {
    static VIEWERS: RefCell<Vec<Viewer>> = const { RefCell::new(Vec::new()) };
}

/// Index of a mounted viewer. Plain data so event closures can capture it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewerId(usize);

pub fn register(spectrum: Spectrum) -> ViewerId {
    VIEWERS.with(|viewers| {
        let mut viewers = viewers.borrow_mut();
        viewers.push(Viewer { spectrum, surface: None });
        ViewerId(viewers.len() - 1)
    })
}

/// Run `f` against a registered viewer. `None` for an unknown id.
pub fn with_viewer<R>(id: ViewerId, f: impl FnOnce(&mut Viewer) -> R) -> Option<R> {
    VIEWERS.with(|viewers| viewers.borrow_mut().get_mut(id.0).map(f))
}

/// One spectrum display plus the canvas it paints on, once mounted.
pub struct Viewer {
    spectrum: Spectrum,
    surface: Option<CanvasSurface>,
}

impl Viewer {
    pub fn spectrum_mut(&mut self) -> &mut Spectrum {
        &mut self.spectrum
    }

    pub fn attach(&mut self, canvas: HtmlCanvasElement) {
        match CanvasSurface::new(canvas) {
            Ok(surface) => {
                surface.sync_to_display();
                let (w, h) = surface.size();
                self.spectrum.resize(w, h);
                self.surface = Some(surface);
                self.redraw();
            }
            Err(e) => log::error!("Failed to attach spectrum canvas: {e:?}"),
        }
    }

    pub fn detach(&mut self) {
        self.surface = None;
    }

    /// Frames arriving before the canvas is mounted are dropped.
    pub fn add_data(&mut self, bins: &[f32]) {
        let Some(surface) = self.surface.as_mut() else {
            log::debug!("frame of {} bins dropped: no canvas", bins.len());
            return;
        };
        surface.sync_to_display();
        self.spectrum.add_data(surface, bins);
    }

    pub fn redraw(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            self.spectrum.redraw(surface);
        }
    }

    pub fn pointer_down(&mut self, x: f64) {
        self.spectrum.pointer_down(x);
    }

    pub fn pointer_move(&mut self, x: f64) {
        if self.spectrum.pointer_move(x) {
            self.redraw();
        }
    }

    pub fn pointer_up(&mut self) {
        self.spectrum.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.spectrum.pointer_leave();
    }

    /// Dispatch a `KeyboardEvent.key` value. Returns true when it was bound.
    pub fn handle_key(&mut self, key: &str) -> bool {
        let Some(action) = action_for_key(key) else {
            return false;
        };
        // Escape leaves fullscreen behind our back; resync before toggling.
        self.spectrum.set_fullscreen(fullscreen_active());
        match self.spectrum.apply(action) {
            Outcome::Unchanged => {}
            Outcome::Redraw => self.redraw(),
            Outcome::Fullscreen(on) => self.set_fullscreen(on),
        }
        true
    }

    fn set_fullscreen(&mut self, on: bool) {
        let Some(surface) = self.surface.as_ref() else { return };
        if on {
            if let Err(e) = surface.canvas().request_fullscreen() {
                log::error!("Fullscreen request failed: {e:?}");
            }
        } else if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.exit_fullscreen();
        }
    }
}

fn fullscreen_active() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.fullscreen_element())
        .is_some()
}
