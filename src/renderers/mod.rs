//! Renderers module
//!
//! The drawing contract the notation layout engine renders through, and
//! the backends implementing it.

pub mod canvas;
pub mod font_sizes;
pub mod svg;

// Re-export commonly used types
pub use canvas::{Canvas, RenderPayload};
pub use font_sizes::{measure_string, SupportedFont};
pub use svg::{CssFontGlyphs, CssFontSvgCanvas, GlyphRenderer, PathGlyphs, PathSvgCanvas, SvgCanvas};
