//! Fonts and text placement
//!
//! A [`Font`] is a family, a pixel size and a style. Text placement on
//! the surface is controlled by [`TextAlign`] (horizontal anchor) and
//! [`TextBaseline`] (vertical anchor).

use serde::{Deserialize, Serialize};

/// Font style flags
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
}

impl FontStyle {
    pub const PLAIN: FontStyle = FontStyle { bold: false, italic: false };
    pub const BOLD: FontStyle = FontStyle { bold: true, italic: false };
    pub const ITALIC: FontStyle = FontStyle { bold: false, italic: true };
    pub const BOLD_ITALIC: FontStyle = FontStyle { bold: true, italic: true };
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Font {
    pub family: String,
    /// Size in pixels
    pub size: f32,
    #[serde(default)]
    pub style: FontStyle,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self::with_style(family, size, FontStyle::PLAIN)
    }

    pub fn with_style(family: impl Into<String>, size: f32, style: FontStyle) -> Self {
        Self {
            family: family.into(),
            size,
            style,
        }
    }

    pub fn is_bold(&self) -> bool {
        self.style.bold
    }

    pub fn is_italic(&self) -> bool {
        self.style.italic
    }

    /// CSS `font` shorthand, e.g. `italic bold 12px 'Georgia'`
    pub fn to_css_string(&self) -> String {
        let mut css = String::new();
        if self.is_italic() {
            css.push_str("italic ");
        }
        if self.is_bold() {
            css.push_str("bold ");
        }
        css.push_str(&format!("{}px {}", self.size, css_quoted(&self.family)));
        css
    }
}

/// Wrap a value in a single-quoted CSS string, escaping `\` and `'`
pub fn css_quoted(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

impl Default for Font {
    fn default() -> Self {
        Font::new("Arial", 10.0)
    }
}

/// Horizontal text alignment relative to the x coordinate
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Parse from the canvas-style names `left`, `center`, `right`
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "left" | "start" => Some(TextAlign::Left),
            "center" => Some(TextAlign::Center),
            "right" | "end" => Some(TextAlign::Right),
            _ => None,
        }
    }

    /// Value of the SVG `text-anchor` attribute
    pub fn svg_anchor(&self) -> &'static str {
        match self {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        }
    }
}

/// Vertical text anchor relative to the y coordinate
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// Alphabetic baseline; text is shifted down by the font size
    #[default]
    Default,
    Top,
    Middle,
    Bottom,
}

impl TextBaseline {
    /// Parse from `alphabetic` (or `default`), `top`, `middle`, `bottom`
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "alphabetic" | "default" => Some(TextBaseline::Default),
            "top" => Some(TextBaseline::Top),
            "middle" => Some(TextBaseline::Middle),
            "bottom" => Some(TextBaseline::Bottom),
            _ => None,
        }
    }

    /// Value of the SVG `dominant-baseline` attribute
    pub fn svg_baseline(&self) -> &'static str {
        match self {
            TextBaseline::Default | TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
            TextBaseline::Bottom => "bottom",
        }
    }

    /// Vertical offset added to the y coordinate when emitting text
    pub fn svg_offset(&self, font: &Font) -> f32 {
        match self {
            TextBaseline::Top | TextBaseline::Middle | TextBaseline::Bottom => 0.0,
            TextBaseline::Default => font.size,
        }
    }
}
