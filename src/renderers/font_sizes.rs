//! Approximate text measurement
//!
//! Widths come from static advance tables for the printable ASCII range
//! (U+0020..U+007E), in 1/1000 em. This is not text shaping: no kerning,
//! no ligatures, and every character outside the table measures as the
//! table's average glyph.

use crate::models::{Font, FontStyle};

const FIRST_CHAR: u32 = 0x20;

/// Widening applied to bold text
const BOLD_FACTOR: f32 = 1.1;

/// Fonts with a metrics table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupportedFont {
    Arial,
    TimesNewRoman,
}

impl SupportedFont {
    /// Pick the metrics table for a font family
    ///
    /// Any family containing "Times" measures as Times New Roman; every
    /// other family measures as Arial.
    pub fn for_family(family: &str) -> Self {
        if family.contains("Times") {
            SupportedFont::TimesNewRoman
        } else {
            SupportedFont::Arial
        }
    }

    fn advances(&self) -> &'static [u16; 95] {
        match self {
            SupportedFont::Arial => &ARIAL,
            SupportedFont::TimesNewRoman => &TIMES_NEW_ROMAN,
        }
    }

    fn fallback_advance(&self) -> u16 {
        match self {
            SupportedFont::Arial => 556,
            SupportedFont::TimesNewRoman => 500,
        }
    }

    fn advance(&self, c: char) -> u16 {
        (c as u32)
            .checked_sub(FIRST_CHAR)
            .and_then(|index| self.advances().get(index as usize))
            .copied()
            .unwrap_or_else(|| self.fallback_advance())
    }
}

/// Width in pixels of `text` set in `font` at `size` pixels
pub fn measure_string(text: &str, font: SupportedFont, size: f32, style: FontStyle) -> f32 {
    let em_units: u64 = text.chars().map(|c| u64::from(font.advance(c))).sum();

    let mut factor = 1.0;
    if style.bold {
        factor *= BOLD_FACTOR;
    }

    em_units as f32 * size / 1000.0 * factor
}

/// Width of `text` in the given font, selecting the table by family
pub fn measure_text(text: &str, font: &Font) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    measure_string(text, SupportedFont::for_family(&font.family), font.size, font.style)
}

#[rustfmt::skip]
static ARIAL: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
static TIMES_NEW_ROMAN: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    // 0-9
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    // : ; < = > ? @
    278, 278, 564, 564, 564, 444, 921,
    // A-Z
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
    722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
    // [ \ ] ^ _ `
    333, 278, 333, 469, 500, 333,
    // a-z
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
    500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
    // { | } ~
    480, 200, 480, 541,
];
