//! Network Wrappers
//!
//! Frontend bindings to external HTTP endpoints.

mod fox;

use wasm_bindgen::{JsCast, JsValue};

pub use fox::*;

/// Best-effort readable text for a rejected promise or thrown value.
pub fn js_error(value: JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .or_else(|| js_sys::JSON::stringify(&value).ok().and_then(|s| s.as_string()))
        .unwrap_or_else(|| format!("{:?}", value))
}
