//! Shared rendering resources
//!
//! Fonts and colors the layout engine picks from when it sets up drawing
//! state. The surface only carries the handle; it never reads or changes
//! the values itself.

use serde::{Deserialize, Serialize};

use super::{Color, Font, FontStyle};
use crate::error::Result;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderingResources {
    pub copyright_font: Font,
    pub title_font: Font,
    pub sub_title_font: Font,
    pub words_font: Font,
    pub effect_font: Font,
    pub tablature_font: Font,
    pub grace_font: Font,
    pub bar_number_font: Font,

    pub staff_line_color: Color,
    pub bar_separator_color: Color,
    pub bar_number_color: Color,
    pub main_glyph_color: Color,
    pub secondary_glyph_color: Color,

    /// Global scale applied by the layout engine
    pub scale: f32,
}

impl Default for RenderingResources {
    fn default() -> Self {
        let sans = "Arial";
        let serif = "Georgia";

        Self {
            copyright_font: Font::with_style(sans, 12.0, FontStyle::BOLD),
            title_font: Font::new(serif, 32.0),
            sub_title_font: Font::new(serif, 20.0),
            words_font: Font::new(serif, 15.0),
            effect_font: Font::with_style(serif, 12.0, FontStyle::ITALIC),
            tablature_font: Font::new(sans, 13.0),
            grace_font: Font::new(sans, 11.0),
            bar_number_font: Font::new(sans, 11.0),

            staff_line_color: Color::new(165, 165, 165),
            bar_separator_color: Color::new(34, 34, 17),
            bar_number_color: Color::new(200, 0, 0),
            main_glyph_color: Color::BLACK,
            secondary_glyph_color: Color::with_alpha(0, 0, 0, 100),

            scale: 1.0,
        }
    }
}

impl RenderingResources {
    /// Load resources from JSON; omitted keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
