//! SVG canvas
//!
//! Each drawing call appends markup to an in-memory document. Rectangles
//! and straight path segments are shifted by half a pixel so that one
//! pixel wide edges land on the pixel grid instead of straddling it;
//! curves and circles are emitted as given.
//!
//! The canvas walks through three document states:
//!
//! ```text
//! Idle --begin_render--> Rendering --end_render--> Finished
//!                          ^   |                       |
//!                          +---+ begin_render          |
//!                          +---------------------------+
//! ```
//!
//! Drawing is only valid while `Rendering`; anything else is reported as
//! an error instead of producing a broken document.

use std::sync::Arc;

use super::{escape_attribute, escape_text};
use super::glyphs::{CssFontGlyphs, GlyphPlacement, GlyphRenderer, PathGlyphs};
use super::path::PathFragment;
use crate::error::{Result, SurfaceError};
use crate::models::{Color, Font, MusicFontSymbol, RenderingResources, TextAlign, TextBaseline};
use crate::renderers::canvas::{Canvas, RenderPayload};
use crate::renderers::font_sizes;

/// Offset applied to rectangle and line coordinates
pub const BLUR_CORRECTION: f32 = 0.5;

/// Class on the root `<svg>` element, for external stylesheets
pub const SURFACE_CLASS: &str = "alphaTabSurfaceSvg";

/// Markup and path buffers of the document being rendered
#[derive(Debug)]
struct SvgDocument {
    markup: String,
    path: PathFragment,
}

#[derive(Debug)]
enum DocumentState {
    Idle,
    Rendering(SvgDocument),
    Finished,
}

impl DocumentState {
    fn active(&mut self, operation: &'static str) -> Result<&mut SvgDocument> {
        let err = match self {
            DocumentState::Rendering(document) => return Ok(document),
            DocumentState::Idle => SurfaceError::NoActiveDocument { operation },
            DocumentState::Finished => SurfaceError::DocumentFinished { operation },
        };
        log::warn!("{}", err);
        Err(err)
    }
}

/// Drawing attributes applied to subsequent calls
#[derive(Clone, Debug, PartialEq)]
struct DrawingState {
    color: Color,
    line_width: f32,
    font: Font,
    text_align: TextAlign,
    text_baseline: TextBaseline,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            line_width: 1.0,
            font: Font::default(),
            text_align: TextAlign::Left,
            text_baseline: TextBaseline::Default,
        }
    }
}

/// A [`Canvas`] producing an SVG document string
///
/// Notation glyphs are delegated to `G`; see [`CssFontGlyphs`] and
/// [`PathGlyphs`].
#[derive(Debug)]
pub struct SvgCanvas<G> {
    document: DocumentState,
    state: DrawingState,
    saved: Vec<DrawingState>,
    resources: Arc<RenderingResources>,
    glyphs: G,
}

/// SVG canvas drawing glyphs through a music web font
pub type CssFontSvgCanvas = SvgCanvas<CssFontGlyphs>;

/// SVG canvas drawing glyphs as inline outlines
pub type PathSvgCanvas = SvgCanvas<PathGlyphs>;

impl<G: GlyphRenderer> SvgCanvas<G> {
    pub fn new(glyphs: G) -> Self {
        Self::with_resources(glyphs, Arc::new(RenderingResources::default()))
    }

    pub fn with_resources(glyphs: G, resources: Arc<RenderingResources>) -> Self {
        Self {
            document: DocumentState::Idle,
            state: DrawingState::default(),
            saved: Vec::new(),
            resources,
            glyphs,
        }
    }

    pub fn glyphs(&self) -> &G {
        &self.glyphs
    }

    /// True between `begin_render` and `end_render`
    pub fn is_rendering(&self) -> bool {
        matches!(self.document, DocumentState::Rendering(_))
    }

    /// Path data accumulated since the last commit, if rendering
    pub fn pending_path(&self) -> Option<&str> {
        match &self.document {
            DocumentState::Rendering(document) => Some(document.path.data()),
            _ => None,
        }
    }

    /// Push the current drawing state (color, line width, font, alignment)
    pub fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    /// Pop the drawing state pushed by the matching [`SvgCanvas::save`]
    pub fn restore(&mut self) -> Result<()> {
        match self.saved.pop() {
            Some(state) => {
                self.state = state;
                Ok(())
            }
            None => {
                log::warn!("{}", SurfaceError::RestoreWithoutSave);
                Err(SurfaceError::RestoreWithoutSave)
            }
        }
    }

    fn rect_element(&mut self, operation: &'static str, x: f32, y: f32, w: f32, h: f32, style: String) -> Result<()> {
        let document = self.document.active(operation)?;
        document.markup.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" style=\"{}\" />\n",
            x - BLUR_CORRECTION,
            y - BLUR_CORRECTION,
            w,
            h,
            style
        ));
        Ok(())
    }
}

impl<G: GlyphRenderer + Default> Default for SvgCanvas<G> {
    fn default() -> Self {
        Self::new(G::default())
    }
}

impl<G: GlyphRenderer> Canvas for SvgCanvas<G> {
    type Output = String;

    fn color(&self) -> Color {
        self.state.color
    }

    fn set_color(&mut self, color: Color) {
        self.state.color = color;
    }

    fn line_width(&self) -> f32 {
        self.state.line_width
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
    }

    fn font(&self) -> &Font {
        &self.state.font
    }

    fn set_font(&mut self, font: Font) {
        self.state.font = font;
    }

    fn text_align(&self) -> TextAlign {
        self.state.text_align
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
    }

    fn text_baseline(&self) -> TextBaseline {
        self.state.text_baseline
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.text_baseline = baseline;
    }

    fn resources(&self) -> &Arc<RenderingResources> {
        &self.resources
    }

    fn set_resources(&mut self, resources: Arc<RenderingResources>) {
        self.resources = resources;
    }

    fn begin_render(&mut self, width: f32, height: f32) {
        if self.is_rendering() {
            log::warn!("begin_render discarded an unfinished document");
        }
        log::debug!("begin_render {}x{}", width, height);

        let markup = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{}px\" height=\"{}px\" class=\"{}\">\n",
            width, height, SURFACE_CLASS
        );
        self.saved.clear();
        self.document = DocumentState::Rendering(SvgDocument {
            markup,
            path: PathFragment::new(),
        });
    }

    fn end_render(&mut self) -> Result<String> {
        match std::mem::replace(&mut self.document, DocumentState::Finished) {
            DocumentState::Rendering(mut document) => {
                document.markup.push_str("</svg>");
                log::debug!("end_render produced {} bytes", document.markup.len());
                Ok(document.markup)
            }
            DocumentState::Idle => {
                self.document = DocumentState::Idle;
                let err = SurfaceError::NoActiveDocument { operation: "end_render" };
                log::warn!("{}", err);
                Err(err)
            }
            DocumentState::Finished => {
                let err = SurfaceError::DocumentFinished { operation: "end_render" };
                log::warn!("{}", err);
                Err(err)
            }
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<()> {
        let style = format!("fill:{};", self.state.color.rgba());
        self.rect_element("fill_rect", x, y, w, h, style)
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<()> {
        let style = format!(
            "stroke:{}; stroke-width:{}; fill:transparent;",
            self.state.color.rgba(),
            self.state.line_width
        );
        self.rect_element("stroke_rect", x, y, w, h, style)
    }

    fn begin_path(&mut self) -> Result<()> {
        // Paths are delimited by fill/stroke
        self.document.active("begin_path")?;
        Ok(())
    }

    fn close_path(&mut self) -> Result<()> {
        self.document.active("close_path")?.path.close();
        Ok(())
    }

    fn move_to(&mut self, x: f32, y: f32) -> Result<()> {
        self.document
            .active("move_to")?
            .path
            .move_to(x - BLUR_CORRECTION, y - BLUR_CORRECTION);
        Ok(())
    }

    fn line_to(&mut self, x: f32, y: f32) -> Result<()> {
        self.document
            .active("line_to")?
            .path
            .line_to(x - BLUR_CORRECTION, y - BLUR_CORRECTION);
        Ok(())
    }

    fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32) -> Result<()> {
        self.document
            .active("quadratic_curve_to")?
            .path
            .quadratic_curve_to(cpx, cpy, x, y);
        Ok(())
    }

    fn bezier_curve_to(
        &mut self,
        cp1x: f32,
        cp1y: f32,
        cp2x: f32,
        cp2y: f32,
        x: f32,
        y: f32,
    ) -> Result<()> {
        self.document
            .active("bezier_curve_to")?
            .path
            .bezier_curve_to(cp1x, cp1y, cp2x, cp2y, x, y);
        Ok(())
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) -> Result<()> {
        self.document.active("fill_circle")?.path.circle(x, y, radius);
        self.fill()
    }

    fn fill(&mut self) -> Result<()> {
        let color = self.state.color.rgba();
        let document = self.document.active("fill")?;
        if let Some(data) = document.path.take() {
            document.markup.push_str(&format!(
                "<path d=\"{}\" style=\"fill:{}\" stroke=\"none\"/>\n",
                data, color
            ));
        }
        Ok(())
    }

    fn stroke(&mut self) -> Result<()> {
        let color = self.state.color.rgba();
        let line_width = self.state.line_width;
        let document = self.document.active("stroke")?;
        if let Some(data) = document.path.take() {
            document.markup.push_str(&format!(
                "<path d=\"{}\" style=\"stroke:{}; stroke-width:{};\" fill=\"none\" />\n",
                data, color, line_width
            ));
        }
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) -> Result<()> {
        let state = &self.state;
        let element = format!(
            "<text x=\"{}\" y=\"{}\" style=\"font:{}; fill:{};\" dominant-baseline=\"{}\" text-anchor=\"{}\">{}</text>\n",
            x,
            y + state.text_baseline.svg_offset(&state.font),
            escape_attribute(&state.font.to_css_string()),
            state.color.rgba(),
            state.text_baseline.svg_baseline(),
            state.text_align.svg_anchor(),
            escape_text(text)
        );
        self.document.active("fill_text")?.markup.push_str(&element);
        Ok(())
    }

    fn measure_text(&self, text: &str) -> f32 {
        font_sizes::measure_text(text, &self.state.font)
    }

    fn fill_music_font_symbol(
        &mut self,
        x: f32,
        y: f32,
        scale: f32,
        symbol: MusicFontSymbol,
    ) -> Result<()> {
        let document = self.document.active("fill_music_font_symbol")?;
        if symbol.is_none() {
            return Ok(());
        }

        let placement = GlyphPlacement {
            x,
            y,
            scale,
            symbol,
            color: self.state.color,
        };
        self.glyphs.render_glyph(&mut document.markup, &placement)
    }

    fn on_pre_render(&mut self) -> Option<RenderPayload> {
        self.glyphs.on_pre_render()
    }

    fn on_render_finished(&mut self) -> Option<RenderPayload> {
        self.glyphs.on_render_finished()
    }
}
