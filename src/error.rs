//! Error types for the drawing surface
//!
//! Drawing calls only fail on lifecycle misuse (drawing outside a
//! begin/end render window), on unbalanced save/restore, on glyphs a
//! backend cannot draw, and on malformed configuration input.

use thiserror::Error;

use crate::models::MusicFontSymbol;

#[derive(Debug, Error)]
pub enum SurfaceError {
    /// A drawing call arrived before `begin_render`
    #[error("{operation} called before begin_render")]
    NoActiveDocument { operation: &'static str },

    /// A drawing call arrived after `end_render` closed the document
    #[error("{operation} called after end_render; call begin_render to start a new document")]
    DocumentFinished { operation: &'static str },

    /// `restore` without a matching `save`
    #[error("restore called without a matching save")]
    RestoreWithoutSave,

    /// The glyph backend has no markup for this symbol
    #[error("no glyph available for {0:?}")]
    MissingGlyph(MusicFontSymbol),

    /// JSON configuration could not be parsed
    #[error("invalid configuration: {0}")]
    InvalidResources(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SurfaceError>;
