//! Random Fox Fetch
//!
//! Two steps: parse the body as JSON, then hand it to the caller.

use likes_binder::FoxImage;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::js_error;

pub async fn fetch_fox(endpoint: &str) -> Result<FoxImage, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let response = JsFuture::from(window.fetch_with_str(endpoint))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(format!("HTTP {} from {}", response.status(), endpoint));
    }

    let body = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
}
