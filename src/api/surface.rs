//! JavaScript-facing SVG surface
//!
//! Wraps a [`CssFontSvgCanvas`] so a browser-side layout engine can draw
//! through the same canvas-style calls it uses for its other backends.

use std::sync::Arc;

use wasm_bindgen::prelude::*;

use super::helpers::{payload_to_js, surface_error, validation_error};
use crate::models::{Color, Font, FontStyle, MusicFontSymbol, RenderingResources, TextAlign, TextBaseline};
use crate::renderers::{Canvas, CssFontGlyphs, CssFontSvgCanvas};

#[wasm_bindgen]
pub struct SvgSurface {
    canvas: CssFontSvgCanvas,
}

#[wasm_bindgen]
impl SvgSurface {
    /// Create a surface, optionally loading rendering resources from JSON
    #[wasm_bindgen(constructor)]
    pub fn new(resources_json: Option<String>) -> Result<SvgSurface, JsValue> {
        let resources = match resources_json {
            Some(json) => RenderingResources::from_json(&json).map_err(surface_error)?,
            None => RenderingResources::default(),
        };

        Ok(SvgSurface {
            canvas: CssFontSvgCanvas::with_resources(CssFontGlyphs::new(), Arc::new(resources)),
        })
    }

    // ------------------------------------------------------------------
    // Drawing state
    // ------------------------------------------------------------------

    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.canvas.set_color(Color::with_alpha(r, g, b, a));
    }

    #[wasm_bindgen(js_name = setLineWidth)]
    pub fn set_line_width(&mut self, width: f32) {
        self.canvas.set_line_width(width);
    }

    #[wasm_bindgen(js_name = setFont)]
    pub fn set_font(&mut self, family: String, size: f32, bold: bool, italic: bool) {
        self.canvas
            .set_font(Font::with_style(family, size, FontStyle { bold, italic }));
    }

    #[wasm_bindgen(js_name = setTextAlign)]
    pub fn set_text_align(&mut self, align: &str) -> Result<(), JsValue> {
        let align = TextAlign::parse(align)
            .ok_or_else(|| validation_error(format!("Invalid text align: '{}'", align)))?;
        self.canvas.set_text_align(align);
        Ok(())
    }

    #[wasm_bindgen(js_name = setTextBaseline)]
    pub fn set_text_baseline(&mut self, baseline: &str) -> Result<(), JsValue> {
        let baseline = TextBaseline::parse(baseline)
            .ok_or_else(|| validation_error(format!("Invalid text baseline: '{}'", baseline)))?;
        self.canvas.set_text_baseline(baseline);
        Ok(())
    }

    pub fn save(&mut self) {
        self.canvas.save();
    }

    pub fn restore(&mut self) -> Result<(), JsValue> {
        self.canvas.restore().map_err(surface_error)
    }

    // ------------------------------------------------------------------
    // Render lifecycle
    // ------------------------------------------------------------------

    #[wasm_bindgen(js_name = beginRender)]
    pub fn begin_render(&mut self, width: f32, height: f32) {
        self.canvas.begin_render(width, height);
    }

    #[wasm_bindgen(js_name = endRender)]
    pub fn end_render(&mut self) -> Result<String, JsValue> {
        self.canvas.end_render().map_err(surface_error)
    }

    #[wasm_bindgen(js_name = onPreRender)]
    pub fn on_pre_render(&mut self) -> Result<JsValue, JsValue> {
        payload_to_js(self.canvas.on_pre_render())
    }

    #[wasm_bindgen(js_name = onRenderFinished)]
    pub fn on_render_finished(&mut self) -> Result<JsValue, JsValue> {
        payload_to_js(self.canvas.on_render_finished())
    }

    // ------------------------------------------------------------------
    // Shapes and paths
    // ------------------------------------------------------------------

    #[wasm_bindgen(js_name = fillRect)]
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<(), JsValue> {
        self.canvas.fill_rect(x, y, w, h).map_err(surface_error)
    }

    #[wasm_bindgen(js_name = strokeRect)]
    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<(), JsValue> {
        self.canvas.stroke_rect(x, y, w, h).map_err(surface_error)
    }

    #[wasm_bindgen(js_name = beginPath)]
    pub fn begin_path(&mut self) -> Result<(), JsValue> {
        self.canvas.begin_path().map_err(surface_error)
    }

    #[wasm_bindgen(js_name = closePath)]
    pub fn close_path(&mut self) -> Result<(), JsValue> {
        self.canvas.close_path().map_err(surface_error)
    }

    #[wasm_bindgen(js_name = moveTo)]
    pub fn move_to(&mut self, x: f32, y: f32) -> Result<(), JsValue> {
        self.canvas.move_to(x, y).map_err(surface_error)
    }

    #[wasm_bindgen(js_name = lineTo)]
    pub fn line_to(&mut self, x: f32, y: f32) -> Result<(), JsValue> {
        self.canvas.line_to(x, y).map_err(surface_error)
    }

    #[wasm_bindgen(js_name = quadraticCurveTo)]
    pub fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32) -> Result<(), JsValue> {
        self.canvas
            .quadratic_curve_to(cpx, cpy, x, y)
            .map_err(surface_error)
    }

    #[wasm_bindgen(js_name = bezierCurveTo)]
    pub fn bezier_curve_to(
        &mut self,
        cp1x: f32,
        cp1y: f32,
        cp2x: f32,
        cp2y: f32,
        x: f32,
        y: f32,
    ) -> Result<(), JsValue> {
        self.canvas
            .bezier_curve_to(cp1x, cp1y, cp2x, cp2y, x, y)
            .map_err(surface_error)
    }

    #[wasm_bindgen(js_name = fillCircle)]
    pub fn fill_circle(&mut self, x: f32, y: f32, radius: f32) -> Result<(), JsValue> {
        self.canvas.fill_circle(x, y, radius).map_err(surface_error)
    }

    pub fn fill(&mut self) -> Result<(), JsValue> {
        self.canvas.fill().map_err(surface_error)
    }

    pub fn stroke(&mut self) -> Result<(), JsValue> {
        self.canvas.stroke().map_err(surface_error)
    }

    // ------------------------------------------------------------------
    // Text and glyphs
    // ------------------------------------------------------------------

    #[wasm_bindgen(js_name = fillText)]
    pub fn fill_text(&mut self, text: &str, x: f32, y: f32) -> Result<(), JsValue> {
        self.canvas.fill_text(text, x, y).map_err(surface_error)
    }

    /// Width of `text` in the current font; `null`/`undefined` measure 0
    #[wasm_bindgen(js_name = measureText)]
    pub fn measure_text(&self, text: Option<String>) -> f32 {
        text.map_or(0.0, |text| self.canvas.measure_text(&text))
    }

    /// Draw a glyph given its SMuFL code point
    #[wasm_bindgen(js_name = fillMusicFontSymbol)]
    pub fn fill_music_font_symbol(&mut self, x: f32, y: f32, scale: f32, codepoint: u32) -> Result<(), JsValue> {
        let symbol = MusicFontSymbol::from_codepoint(codepoint)
            .ok_or_else(|| validation_error(format!("Unknown music font symbol: U+{:04X}", codepoint)))?;
        self.canvas
            .fill_music_font_symbol(x, y, scale, symbol)
            .map_err(surface_error)
    }
}
