//! Music Notation SVG Surface
//!
//! A vector drawing surface for a music notation engine. The layout engine
//! draws rectangles, paths, text and notation glyphs through the
//! [`Canvas`](renderers::Canvas) contract; [`SvgCanvas`](renderers::SvgCanvas)
//! turns those calls into an SVG document string.

pub mod api;
pub mod error;
pub mod models;
pub mod renderers;

// Re-export commonly used types
pub use error::{Result, SurfaceError};
pub use models::*;
pub use renderers::{Canvas, CssFontGlyphs, CssFontSvgCanvas, PathGlyphs, PathSvgCanvas, SvgCanvas};

use wasm_bindgen::prelude::*;

// Runs once when the WASM module is instantiated
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Fails only when a logger is already installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Notation SVG surface WASM module initialized");
}
