//! WASM API
//!
//! JavaScript bindings for the drawing surface:
//! - **surface**: the `SvgSurface` class
//! - **helpers**: error conversion and payload serialization

pub mod helpers;
pub mod surface;

pub use surface::SvgSurface;
