//! Shared helpers for the WASM API
//!
//! Error conversion and payload serialization between Rust and JavaScript.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::SurfaceError;
use crate::renderers::RenderPayload;

/// Convert a surface error to a JsValue, logging it on the way out
pub fn surface_error(err: SurfaceError) -> JsValue {
    log::error!("{}", err);
    JsValue::from_str(&err.to_string())
}

/// Convert a validation error to a JsValue
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}

/// Serialize a lifecycle payload as a plain JS object (`null` when absent)
pub fn payload_to_js(payload: Option<RenderPayload>) -> Result<JsValue, JsValue> {
    let Some(payload) = payload else {
        return Ok(JsValue::NULL);
    };

    payload
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| validation_error(format!("Failed to serialize render payload: {}", e)))
}
