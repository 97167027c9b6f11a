pub mod spectrum_canvas;
