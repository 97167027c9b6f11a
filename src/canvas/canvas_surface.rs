use spectrum_core::surface::{Gradient, ImageView, Rect, Rgba, Surface, TextStyle};
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

/// [`Surface`] backed by a browser 2D canvas.
///
/// Waterfall blits go through a second, detached canvas that is resized only
/// when the history image changes shape.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    offscreen: HtmlCanvasElement,
    offscreen_ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = context_2d(&canvas)?;
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let offscreen = document.create_element("canvas")?.dyn_into::<HtmlCanvasElement>()?;
        let offscreen_ctx = context_2d(&offscreen)?;
        Ok(Self { canvas, ctx, offscreen, offscreen_ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Match the backing store to the element's layout size.
    /// Returns true when it changed.
    pub fn sync_to_display(&self) -> bool {
        let w = self.canvas.client_width().max(0) as u32;
        let h = self.canvas.client_height().max(0) as u32;
        if w == 0 || h == 0 || (self.canvas.width() == w && self.canvas.height() == h) {
            return false;
        }
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        true
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(1.0);
        self.ctx.stroke();
    }

    fn fill_gradient(&mut self, gradient: &Gradient) {
        let g = self.ctx.create_linear_gradient(0.0, gradient.y0, 0.0, gradient.y1);
        for (offset, color) in &gradient.stops {
            if let Err(e) = g.add_color_stop(*offset, &color.to_css()) {
                log::error!("Bad gradient stop at {offset}: {e:?}");
                return;
            }
        }
        self.ctx.set_fill_style_canvas_gradient(&g);
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.ctx.set_font(style.font);
        self.ctx.set_fill_style_str(&style.color.to_css());
        self.ctx.set_text_align(style.align.as_css());
        self.ctx.set_text_baseline(style.baseline.as_css());
        let _ = self.ctx.fill_text(text, x, y);
    }

    fn blit(&mut self, image: ImageView<'_>, dst: Rect) {
        if image.width == 0 || image.height == 0 {
            return;
        }
        if self.offscreen.width() != image.width || self.offscreen.height() != image.height {
            self.offscreen.set_width(image.width);
            self.offscreen.set_height(image.height);
        }

        let img = match ImageData::new_with_u8_clamped_array_and_sh(Clamped(image.pixels), image.width, image.height) {
            Ok(img) => img,
            Err(e) => {
                log::error!("Failed to create ImageData: {e:?}");
                return;
            }
        };
        let _ = self.offscreen_ctx.put_image_data(&img, 0.0, 0.0);

        self.ctx.set_image_smoothing_enabled(false);
        let _ = self.ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
            &self.offscreen,
            dst.x,
            dst.y,
            dst.width,
            dst.height,
        );
    }
}
