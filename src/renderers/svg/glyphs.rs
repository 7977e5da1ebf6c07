//! Music glyph backends for the SVG canvas
//!
//! The canvas draws everything except notation glyphs itself. Glyphs go
//! through a [`GlyphRenderer`], which decides what markup a symbol turns
//! into:
//!
//! - [`CssFontGlyphs`]: a `<text>` element holding the SMuFL code point,
//!   rendered by a music web font the host page installs via CSS.
//! - [`PathGlyphs`]: inline `<path>` outlines looked up from a table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::escape_attribute;
use crate::error::{Result, SurfaceError};
use crate::models::font::css_quoted;
use crate::models::{Color, MusicFontSymbol};
use crate::renderers::canvas::RenderPayload;

/// Where and how a single glyph is drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPlacement {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub symbol: MusicFontSymbol,
    pub color: Color,
}

pub trait GlyphRenderer {
    /// Append the markup for one glyph to `out`
    fn render_glyph(&self, out: &mut String, glyph: &GlyphPlacement) -> Result<()>;

    fn on_pre_render(&self) -> Option<RenderPayload> {
        None
    }

    fn on_render_finished(&self) -> Option<RenderPayload> {
        None
    }
}

// ============================================================================
// Web font glyphs
// ============================================================================

/// Glyphs drawn as characters of a music web font
#[derive(Clone, Debug, PartialEq)]
pub struct CssFontGlyphs {
    css_class: String,
    font_family: String,
    font_size: f32,
}

impl CssFontGlyphs {
    pub fn new() -> Self {
        Self {
            css_class: "at".to_string(),
            font_family: "alphaTab".to_string(),
            font_size: 34.0,
        }
    }

    /// CSS class put on every glyph group
    pub fn css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = class.into();
        self
    }

    /// Font family the stylesheet binds the class to
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Glyph size in pixels at scale 1
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Stylesheet rule the host page needs for the glyphs to render
    pub fn stylesheet(&self) -> String {
        format!(
            ".{} {{ font-family: {}; font-style: normal; font-weight: normal; \
             font-variant: normal; text-transform: none; line-height: 1; font-size: {}px; }}",
            self.css_class,
            css_quoted(&self.font_family),
            self.font_size
        )
    }
}

impl Default for CssFontGlyphs {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphRenderer for CssFontGlyphs {
    fn render_glyph(&self, out: &mut String, glyph: &GlyphPlacement) -> Result<()> {
        let codepoint = glyph
            .symbol
            .codepoint()
            .ok_or(SurfaceError::MissingGlyph(glyph.symbol))?;

        out.push_str(&format!(
            "<g transform=\"translate({} {})\" class=\"{}\">",
            glyph.x,
            glyph.y,
            escape_attribute(&self.css_class)
        ));

        out.push_str("<text style=\"stroke:none");
        if glyph.scale != 1.0 {
            out.push_str(&format!("; font-size:{}%", glyph.scale * 100.0));
        }
        out.push('"');

        // Black is the stylesheet default
        if glyph.color != Color::BLACK {
            out.push_str(&format!(" fill=\"{}\"", glyph.color.rgba()));
        }

        out.push_str(&format!(">&#{};</text></g>\n", codepoint));
        Ok(())
    }

    fn on_pre_render(&self) -> Option<RenderPayload> {
        Some(json!({ "stylesheet": self.stylesheet() }))
    }
}

// ============================================================================
// Inline outline glyphs
// ============================================================================

/// Glyphs drawn as inline path outlines
///
/// Outlines are SVG path data positioned relative to the glyph origin at
/// scale 1. They are typically exported once from a SMuFL font.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct PathGlyphs {
    outlines: HashMap<MusicFontSymbol, String>,
}

impl PathGlyphs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load outlines from a JSON object mapping symbol names to path data,
    /// e.g. `{"NoteheadBlack": "M0,0 C..."}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_outline(mut self, symbol: MusicFontSymbol, path_data: impl Into<String>) -> Self {
        self.insert(symbol, path_data);
        self
    }

    pub fn insert(&mut self, symbol: MusicFontSymbol, path_data: impl Into<String>) {
        self.outlines.insert(symbol, path_data.into());
    }

    pub fn outline(&self, symbol: MusicFontSymbol) -> Option<&str> {
        self.outlines.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.outlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outlines.is_empty()
    }
}

impl GlyphRenderer for PathGlyphs {
    fn render_glyph(&self, out: &mut String, glyph: &GlyphPlacement) -> Result<()> {
        let outline = self
            .outline(glyph.symbol)
            .ok_or(SurfaceError::MissingGlyph(glyph.symbol))?;

        out.push_str(&format!(
            "<path transform=\"translate({} {}) scale({})\" d=\"{}\" style=\"fill:{}\" />\n",
            glyph.x,
            glyph.y,
            glyph.scale,
            escape_attribute(outline),
            glyph.color.rgba()
        ));
        Ok(())
    }
}
