//! Data types shared by the drawing surface and its callers

pub mod color;
pub mod font;
pub mod resources;
pub mod symbols;

pub use color::Color;
pub use font::{Font, FontStyle, TextAlign, TextBaseline};
pub use resources::RenderingResources;
pub use symbols::MusicFontSymbol;
