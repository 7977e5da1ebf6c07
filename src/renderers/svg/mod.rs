//! SVG rendering output
//!
//! - **canvas**: [`SvgCanvas`], the [`Canvas`](crate::renderers::Canvas)
//!   implementation that accumulates SVG markup
//! - **path**: path data accumulated between fill/stroke commits
//! - **glyphs**: music glyph backends (web font, inline outlines)

pub mod canvas;
pub mod glyphs;
pub mod path;

pub use canvas::{CssFontSvgCanvas, PathSvgCanvas, SvgCanvas, BLUR_CORRECTION, SURFACE_CLASS};
pub use glyphs::{CssFontGlyphs, GlyphPlacement, GlyphRenderer, PathGlyphs};
pub use path::PathFragment;

use std::borrow::Cow;

use quick_xml::escape::{escape, partial_escape};

/// Characters XML 1.0 cannot carry, escaped or not
fn is_non_xml_char(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
}

/// Replace characters XML 1.0 cannot carry with U+FFFD, then escape
fn escape_with<'a>(value: &'a str, escape_fn: fn(&str) -> Cow<'_, str>) -> Cow<'a, str> {
    if !value.chars().any(is_non_xml_char) {
        return escape_fn(value);
    }

    let replaced: String = value
        .chars()
        .map(|c| if is_non_xml_char(c) { char::REPLACEMENT_CHARACTER } else { c })
        .collect();
    Cow::Owned(escape_fn(&replaced).into_owned())
}

/// Escape a caller-supplied string for use as element text
pub(crate) fn escape_text(value: &str) -> Cow<'_, str> {
    escape_with(value, partial_escape)
}

/// Escape a caller-supplied string for use inside a double-quoted attribute
pub(crate) fn escape_attribute(value: &str) -> Cow<'_, str> {
    escape_with(value, escape)
}
