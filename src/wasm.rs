//! WASM bindings for unshroud
//!
//! This module exposes document recovery to JavaScript.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::commands;

/// Initialize panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Recover the secret hidden in a JSON share document
///
/// # Arguments
/// * `document` - JSON text with a `keys.k` threshold and base-encoded shares
///
/// # Returns
/// JSON report string (`secret` is `null` when nothing was recovered), or an
/// error message if the document cannot be decoded
///
/// # Example (JavaScript)
/// ```javascript
/// const report = JSON.parse(wasm_recover(JSON.stringify({
///     keys: { n: 4, k: 3 },
///     "1": { base: "10", value: "4" },
///     "2": { base: "2", value: "111" },
///     "3": { base: "10", value: "12" },
///     "6": { base: "4", value: "213" },
/// })));
/// console.log(`Secret: ${report.secret}`);
/// ```
#[wasm_bindgen]
pub fn wasm_recover(document: &str) -> Result<String, JsValue> {
    let report = commands::recover_document(document)
        .map_err(|e| JsValue::from_str(&format!("Recovery failed: {e:#}")))?;

    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}

/// Decode a share document without recovering, listing its shares
///
/// # Returns
/// JSON string with `threshold` and `shares` (`x`/`y` as decimal strings)
#[wasm_bindgen]
pub fn wasm_decode(document: &str) -> Result<String, JsValue> {
    use crate::codec;

    let decoded = codec::decode_document(document)
        .map_err(|e| JsValue::from_str(&format!("Decode failed: {e:#}")))?;

    #[derive(Serialize)]
    struct DecodedShare {
        x: String,
        y: String,
    }

    #[derive(Serialize)]
    struct DecodedDocument {
        threshold: usize,
        shares: Vec<DecodedShare>,
    }

    let output = DecodedDocument {
        threshold: decoded.threshold,
        shares: decoded
            .shares
            .iter()
            .map(|share| DecodedShare {
                x: share.x.to_string(),
                y: share.y.to_string(),
            })
            .collect(),
    };

    serde_json::to_string(&output)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}
