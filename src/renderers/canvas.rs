//! Drawing contract shared by all rendering backends
//!
//! The notation layout engine draws through [`Canvas`] only, so that the
//! same layout code can target SVG markup or any other backend that
//! implements these operations with the same coordinate semantics.
//!
//! A canvas belongs to exactly one render pass at a time. Backends keep
//! their document and path buffers privately, so rendering independent
//! documents concurrently means one canvas per render; the only thing
//! shared between canvases is the read-only [`RenderingResources`].

use std::sync::Arc;

use crate::error::Result;
use crate::models::{Color, Font, MusicFontSymbol, RenderingResources, TextAlign, TextBaseline};

/// Backend-defined data returned from the render lifecycle hooks
pub type RenderPayload = serde_json::Value;

pub trait Canvas {
    /// Finished document type handed back by [`Canvas::end_render`]
    type Output;

    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn line_width(&self) -> f32;
    fn set_line_width(&mut self, width: f32);

    fn font(&self) -> &Font;
    fn set_font(&mut self, font: Font);

    fn text_align(&self) -> TextAlign;
    fn set_text_align(&mut self, align: TextAlign);

    fn text_baseline(&self) -> TextBaseline;
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn resources(&self) -> &Arc<RenderingResources>;
    fn set_resources(&mut self, resources: Arc<RenderingResources>);

    /// Start a new document of the given size, discarding any previous one
    fn begin_render(&mut self, width: f32, height: f32);

    /// Close the document and hand it to the caller
    fn end_render(&mut self) -> Result<Self::Output>;

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<()>;
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<()>;

    fn begin_path(&mut self) -> Result<()>;
    fn close_path(&mut self) -> Result<()>;
    fn move_to(&mut self, x: f32, y: f32) -> Result<()>;
    fn line_to(&mut self, x: f32, y: f32) -> Result<()>;
    fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32) -> Result<()>;
    fn bezier_curve_to(
        &mut self,
        cp1x: f32,
        cp1y: f32,
        cp2x: f32,
        cp2y: f32,
        x: f32,
        y: f32,
    ) -> Result<()>;

    /// Draw a filled circle and commit it immediately
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) -> Result<()>;

    /// Commit the current path as a filled shape
    fn fill(&mut self) -> Result<()>;

    /// Commit the current path as an outline
    fn stroke(&mut self) -> Result<()>;

    fn fill_text(&mut self, text: &str, x: f32, y: f32) -> Result<()>;

    /// Approximate width of `text` in the current font
    fn measure_text(&self, text: &str) -> f32;

    fn fill_music_font_symbol(
        &mut self,
        x: f32,
        y: f32,
        scale: f32,
        symbol: MusicFontSymbol,
    ) -> Result<()>;

    /// Called by the render orchestration right before a render pass
    fn on_pre_render(&mut self) -> Option<RenderPayload> {
        None
    }

    /// Called by the render orchestration right after a render pass
    fn on_render_finished(&mut self) -> Option<RenderPayload> {
        None
    }
}
