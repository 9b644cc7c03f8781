// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.
// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! Browser bindings for the manifest store summary.
//!
//! The page reads an asset with the C2PA JavaScript SDK and hands the
//! resulting manifest store (a plain object, or its JSON text) to these
//! functions. Nothing here parses the asset itself.

use js_sys::JSON;
use wasm_bindgen::prelude::*;
use web_sys::console;

/// Initialize the panic hook for better error reporting in the browser
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Converts the value handed over by JavaScript to manifest store JSON text.
///
/// `null` and `undefined` mean the asset has no C2PA data.
fn store_json(store: &JsValue) -> Result<String, JsError> {
    if store.is_null() || store.is_undefined() {
        return Ok("null".to_owned());
    }
    if let Some(json) = store.as_string() {
        return Ok(json);
    }
    JSON::stringify(store)
        .map(String::from)
        .map_err(|e| JsError::new(&format!("Failed to serialize manifest store: {e:?}")))
}

fn summary_json_from_str(json: &str) -> c2pa_summary::Result<String> {
    c2pa_summary::summarize_str(json)?.to_json()
}

fn summary_text_from_str(json: &str) -> c2pa_summary::Result<String> {
    Ok(c2pa_summary::summarize_str(json)?.to_string())
}

fn panel_from_str(json: &str) -> c2pa_summary::Result<String> {
    Ok(c2pa_summary::render_panel(&c2pa_summary::summarize_str(json)?))
}

fn highlight_from_str(json: &str) -> c2pa_summary::Result<String> {
    let store: serde_json::Value = serde_json::from_str(json)?;
    c2pa_summary::highlight_value(&store)
}

fn js_error(err: c2pa_summary::Error) -> JsError {
    JsError::new(&err.to_string())
}

/// Summarize a manifest store
///
/// # Arguments
/// * `store` - The manifest store as an object or JSON string, or null
///
/// # Returns
/// The display summary as a JSON string
#[wasm_bindgen]
pub fn summarize(store: &JsValue) -> Result<String, JsError> {
    summary_json_from_str(&store_json(store)?).map_err(js_error)
}

/// Summarize a manifest store as plain text
#[wasm_bindgen]
pub fn summary_text(store: &JsValue) -> Result<String, JsError> {
    summary_text_from_str(&store_json(store)?).map_err(js_error)
}

/// Render the details panel of a manifest store
///
/// # Returns
/// An HTML fragment; all manifest-supplied text is escaped
#[wasm_bindgen]
pub fn render_panel(store: &JsValue) -> Result<String, JsError> {
    panel_from_str(&store_json(store)?).map_err(js_error)
}

/// Pretty-print and syntax-highlight a manifest store
#[wasm_bindgen]
pub fn highlight_store(store: &JsValue) -> Result<String, JsError> {
    highlight_from_str(&store_json(store)?).map_err(js_error)
}

/// Syntax-highlight JSON text that is already formatted
#[wasm_bindgen]
pub fn highlight_json(json: &str) -> String {
    c2pa_summary::highlight_json(json)
}

/// Get the version of the summary library
#[wasm_bindgen]
pub fn version() -> String {
    c2pa_summary::VERSION.to_string()
}

/// Log a message to the console (for debugging)
#[wasm_bindgen]
pub fn log(message: &str) {
    console::log_1(&message.into());
}
